//! Inputs and outputs of an allowance calculation

use chrono::NaiveDate;
use serde::Serialize;

use super::money::Money;

/// Everything the calculator needs besides today's date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationInput {
    /// Date on which the next pay arrives
    pub next_payday: NaiveDate,
    /// Money that has to last until payday
    pub money_remaining: Money,
    /// Non-negotiable payments still due before payday
    pub fixed_expenses: Money,
    /// Whether today still counts as a spending day
    pub include_today: bool,
}

impl CalculationInput {
    /// Create an input with no fixed expenses that excludes today
    pub fn new(next_payday: NaiveDate, money_remaining: Money) -> Self {
        Self {
            next_payday,
            money_remaining,
            fixed_expenses: Money::zero(),
            include_today: false,
        }
    }

    /// Set the pending fixed expenses
    pub fn with_fixed_expenses(mut self, fixed_expenses: Money) -> Self {
        self.fixed_expenses = fixed_expenses;
        self
    }

    /// Set whether today counts as a spending day
    pub fn with_include_today(mut self, include_today: bool) -> Self {
        self.include_today = include_today;
        self
    }
}

/// Outcome of an allowance calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub next_payday: NaiveDate,
    pub spending_days_remaining: i64,
    pub money_remaining: Money,
    pub fixed_expenses: Money,
    /// `money_remaining - fixed_expenses`
    pub money_available: Money,
    pub per_day_amount: Money,
}
