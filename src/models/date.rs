//! Calendar date parsing
//!
//! Dates on the command line must be written exactly as `YYYY-MM-DD`.

use chrono::NaiveDate;

use crate::error::{PaydayError, PaydayResult};

/// The only accepted date layout
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string
///
/// chrono alone would also accept `2069-7-24` or a signed, five-digit year,
/// so the shape is checked before handing the string to chrono, which then
/// rejects impossible dates such as `2025-02-30`.
pub fn parse_date(s: &str) -> PaydayResult<NaiveDate> {
    if !has_iso_shape(s) {
        return Err(PaydayError::invalid_date(s));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| PaydayError::invalid_date(s))
}

fn has_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
