//! Core data models for the payday calculator
//!
//! Plain values created from command-line input, consumed by one calculation
//! and dropped when the process exits.

pub mod allowance;
pub mod date;
pub mod money;

pub use allowance::{CalculationInput, CalculationResult};
pub use date::parse_date;
pub use money::Money;
