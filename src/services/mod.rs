//! Service layer for the payday calculator
//!
//! Business logic on top of the plain data models.

pub mod allowance;

pub use allowance::{compute, AllowanceCalculator};
