//! payday - how much can I spend per day until payday?
//!
//! This library provides the core functionality for the `payday` command-line
//! calculator. Given the money left, the fixed expenses still due and the date
//! of the next payday, it splits what remains evenly across the days left.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Report settings and logging setup
//! - `error`: Custom error types
//! - `models`: Money, dates and calculation inputs/results
//! - `services`: The allowance calculation
//! - `display`: Report formatting
//! - `cli`: Command-line arguments and handler
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use payday::models::{CalculationInput, Money};
//! use payday::services::AllowanceCalculator;
//!
//! let today = NaiveDate::from_ymd_opt(2069, 7, 21).unwrap();
//! let payday = NaiveDate::from_ymd_opt(2069, 7, 24).unwrap();
//! let input = CalculationInput::new(payday, Money::from_cents(10_000))
//!     .with_fixed_expenses(Money::from_cents(1_000))
//!     .with_include_today(true);
//!
//! let result = AllowanceCalculator::new(today).compute(&input).unwrap();
//! assert_eq!(result.spending_days_remaining, 3);
//! assert_eq!(result.per_day_amount.to_string(), "30.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{PaydayError, PaydayResult};
