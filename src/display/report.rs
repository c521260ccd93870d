//! Allowance report formatting
//!
//! Renders a [`CalculationResult`] as the plain-text summary or as JSON.

use serde::Serialize;

use crate::config::Settings;
use crate::error::PaydayResult;
use crate::models::money::group_thousands;
use crate::models::{CalculationResult, Money};

/// Format the human-readable allowance report
pub fn format_allowance_report(result: &CalculationResult, settings: &Settings) -> String {
    let money = |amount: Money| amount.format_with_symbol(&settings.currency_symbol);

    let remaining = money(result.money_remaining);
    let fixed = money(result.fixed_expenses);

    let mut output = String::new();
    output.push_str(&format!(
        "You have {} days left until payday ({} {})\n",
        format_count(result.spending_days_remaining),
        result.next_payday.format("%A"),
        result.next_payday.format("%Y-%m-%d"),
    ));
    output.push_str(&format!(
        "You have {} left to spend and {} still to pay in fixed expenses before then.\n",
        remaining, fixed
    ));
    output.push_str(&format!(
        "This means that you have {} = ({} - {}) in total to spend until payday.\n",
        money(result.money_available),
        remaining,
        fixed
    ));
    output.push_str(&format!(
        "i.e. you can spend {} per day until you will be paid again.\n",
        money(result.per_day_amount)
    ));

    output
}

/// Format an integer with thousands separators
pub fn format_count(n: i64) -> String {
    let grouped = group_thousands(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a CalculationResult,
    weekday: String,
}

/// Format the result as pretty-printed JSON
pub fn format_allowance_json(result: &CalculationResult) -> PaydayResult<String> {
    let report = JsonReport {
        result,
        weekday: result.next_payday.format("%A").to_string(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
