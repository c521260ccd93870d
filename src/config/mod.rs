//! Configuration module for the payday calculator
//!
//! This module provides:
//! - Report settings resolved from flags and environment
//! - Logging initialization

pub mod logging;
pub mod settings;

pub use settings::{OutputFormat, Settings};
