//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the calculation
//! service and report formatting.

pub mod allowance;

pub use allowance::{handle_allowance_command, run_allowance, AllowanceArgs};
