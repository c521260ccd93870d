//! Custom error types for the payday calculator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for payday calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaydayError {
    /// A command-line value could not be parsed
    #[error("invalid {argument}: {reason}: {value:?}")]
    ArgumentFormat {
        argument: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The payday is today or already in the past
    #[error("next payday ({payday}) must be in the future (today is {today})")]
    InvalidPayday { payday: NaiveDate, today: NaiveDate },

    /// No spending days are left once today is excluded
    #[error(
        "no spending days left before payday ({days} days); \
         pass --include_today to spend money today"
    )]
    ZeroOrNegativeDays { days: i64 },

    /// Decimal arithmetic overflowed
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl PaydayError {
    /// Create an argument error for a malformed date string
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::ArgumentFormat {
            argument: "date",
            value: value.into(),
            reason: "not a valid date (expected YYYY-MM-DD)",
        }
    }

    /// Create an argument error for a malformed decimal amount
    pub fn invalid_amount(value: impl Into<String>) -> Self {
        Self::ArgumentFormat {
            argument: "amount",
            value: value.into(),
            reason: "not a valid decimal number",
        }
    }

    /// Check if this error came from parsing user input
    pub fn is_argument_format(&self) -> bool {
        matches!(self, Self::ArgumentFormat { .. })
    }
}

impl From<serde_json::Error> for PaydayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for payday operations
pub type PaydayResult<T> = Result<T, PaydayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = PaydayError::invalid_date("2069/07/24");
        assert_eq!(
            err.to_string(),
            "invalid date: not a valid date (expected YYYY-MM-DD): \"2069/07/24\""
        );
        assert!(err.is_argument_format());
    }

    #[test]
    fn test_invalid_payday_display() {
        let err = PaydayError::InvalidPayday {
            payday: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            today: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "next payday (2025-01-10) must be in the future (today is 2025-01-10)"
        );
        assert!(!err.is_argument_format());
    }

    #[test]
    fn test_zero_days_display() {
        let err = PaydayError::ZeroOrNegativeDays { days: 0 };
        assert!(err.to_string().starts_with("no spending days left before payday (0 days)"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PaydayError = json_err.into();
        assert!(matches!(err, PaydayError::Json(_)));
    }
}
