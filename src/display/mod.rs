//! Display formatting for terminal output
//!
//! Turns calculation results into the text report or JSON.

pub mod report;

pub use report::{format_allowance_json, format_allowance_report, format_count};
