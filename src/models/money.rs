//! Money type for representing currency amounts
//!
//! Wraps an exact base-10 `Decimal` so subtraction and per-day division never
//! pick up binary floating-point error. Provides parsing and grouped
//! formatting for reports.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{PaydayError, PaydayResult};

/// Represents an exact monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use payday::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain decimals ("10.50", "-3", "+0.5", "-.5") and scientific notation
    /// ("1e3", "2.5E-1"). Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> PaydayResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PaydayError::invalid_amount(s));
        }

        // ".5" and "-.5" get an explicit leading zero
        let normalized = match trimmed.split_once('.') {
            Some((sign @ ("" | "-" | "+"), frac)) if !frac.is_empty() => format!("{}0.{}", sign, frac),
            _ => trimmed.to_string(),
        };

        Decimal::from_str(&normalized)
            .or_else(|_| Decimal::from_scientific(&normalized))
            .map(Self)
            .map_err(|_| PaydayError::invalid_amount(s))
    }

    /// Subtract, reporting overflow instead of panicking
    pub fn checked_sub(self, other: Self) -> PaydayResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| PaydayError::Overflow(format!("{} - {}", self.0, other.0)))
    }

    /// Split the amount evenly across `days`
    ///
    /// Division keeps rust_decimal's full precision; rounding to cents only
    /// happens when the amount is displayed.
    pub fn checked_div_days(self, days: i64) -> PaydayResult<Self> {
        if days <= 0 {
            return Err(PaydayError::ZeroOrNegativeDays { days });
        }

        self.0
            .checked_div(Decimal::from(days))
            .map(Self)
            .ok_or_else(|| PaydayError::Overflow(format!("{} / {}", self.0, days)))
    }

    /// Round to cents using banker's rounding
    pub fn round_cents(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Format with thousands separators, two decimals and a currency symbol
    ///
    /// The sign goes before the symbol: `-$1,234.50`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.round_cents();
        let mut abs = rounded.0.abs();
        abs.rescale(2);

        let digits = abs.to_string();
        let (int_part, dec_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let sign = if rounded.is_negative() { "-" } else { "" };
        format!("{}{}{}.{}", sign, symbol, group_thousands(int_part), dec_part)
    }
}

/// Insert `,` between every group of three digits, counting from the right
pub fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Money {
    type Err = PaydayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.amount(), dec!(10.50));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::new(dec!(30)).to_string(), "30.00");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(dec!(1234567.891)).to_string(), "1,234,567.89");
        assert_eq!(Money::new(dec!(-1000)).to_string(), "-1,000.00");
        assert_eq!(Money::new(dec!(999.999)).to_string(), "1,000.00");
        assert_eq!(Money::new(dec!(100)).to_string(), "100.00");
    }

    #[test]
    fn test_display_rounds_half_to_even() {
        assert_eq!(Money::new(dec!(0.125)).to_string(), "0.12");
        assert_eq!(Money::new(dec!(0.135)).to_string(), "0.14");
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(dec!(1234.5)).format_with_symbol("$"), "$1,234.50");
        assert_eq!(Money::new(dec!(-1234.5)).format_with_symbol("$"), "-$1,234.50");
        assert_eq!(Money::new(dec!(12)).format_with_symbol("£"), "£12.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse("-10.50").unwrap().amount(), dec!(-10.50));
        assert_eq!(Money::parse("10").unwrap().amount(), dec!(10));
        assert_eq!(Money::parse(" 7.25 ").unwrap().amount(), dec!(7.25));
        assert_eq!(Money::parse("1e3").unwrap().amount(), dec!(1000));
        assert_eq!(Money::parse("0.000001").unwrap().amount(), dec!(0.000001));
        assert_eq!(Money::parse("-.5").unwrap().amount(), dec!(-0.5));
        assert_eq!(Money::parse(".25").unwrap().amount(), dec!(0.25));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", ".", "-.", "abc", "10.5.0", "$10", "ten"] {
            let err = Money::parse(bad).unwrap_err();
            assert!(err.is_argument_format(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_checked_div_days_is_exact() {
        let m = Money::new(dec!(90));
        assert_eq!(m.checked_div_days(3).unwrap().amount(), dec!(30));

        let third = Money::new(dec!(100)).checked_div_days(3).unwrap();
        assert_eq!(third.to_string(), "33.33");
        assert!(third.amount() > dec!(33.3333333333));
    }

    #[test]
    fn test_checked_div_days_rejects_zero() {
        let err = Money::new(dec!(10)).checked_div_days(0).unwrap_err();
        assert_eq!(err, PaydayError::ZeroOrNegativeDays { days: 0 });
    }

    #[test]
    fn test_checked_sub_overflow() {
        let err = Money::new(Decimal::MIN)
            .checked_sub(Money::new(Decimal::MAX))
            .unwrap_err();
        assert!(matches!(err, PaydayError::Overflow(_)));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_sub(b).unwrap().amount(), dec!(5.00));
        assert!(b.checked_sub(a).unwrap().is_negative());
        assert_eq!(b.checked_sub(a).unwrap().abs(), b);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(dec!(10.50));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");
    }
}
