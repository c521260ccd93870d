//! Allowance calculation service
//!
//! Splits the money left after fixed expenses evenly across the days
//! remaining until payday.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::{PaydayError, PaydayResult};
use crate::models::{CalculationInput, CalculationResult};

/// Service computing the uniform daily allowance until payday
///
/// The evaluation date is fixed when the calculator is created, so a
/// calculator built with [`AllowanceCalculator::new`] is fully deterministic.
#[derive(Debug, Clone, Copy)]
pub struct AllowanceCalculator {
    today: NaiveDate,
}

impl AllowanceCalculator {
    /// Create a calculator evaluating against the given date
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Create a calculator evaluating against the system's local date
    pub fn from_system_clock() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The date calculations are evaluated against
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Compute days remaining and the per-day allowance
    pub fn compute(&self, input: &CalculationInput) -> PaydayResult<CalculationResult> {
        compute(self.today, input)
    }
}

/// Compute days remaining and the per-day allowance as of `today`
///
/// Fails with [`PaydayError::InvalidPayday`] unless the payday is strictly
/// after `today`, and with [`PaydayError::ZeroOrNegativeDays`] when payday is
/// tomorrow and today is excluded.
pub fn compute(today: NaiveDate, input: &CalculationInput) -> PaydayResult<CalculationResult> {
    debug!(
        %today,
        next_payday = %input.next_payday,
        money_remaining = %input.money_remaining.amount(),
        fixed_expenses = %input.fixed_expenses.amount(),
        include_today = input.include_today,
        "computing allowance"
    );

    if input.next_payday <= today {
        return Err(PaydayError::InvalidPayday {
            payday: input.next_payday,
            today,
        });
    }

    let mut days = (input.next_payday - today).num_days();
    if !input.include_today {
        days -= 1;
    }
    debug!(days, "spending days until payday");

    if days <= 0 {
        return Err(PaydayError::ZeroOrNegativeDays { days });
    }

    let money_available = input.money_remaining.checked_sub(input.fixed_expenses)?;
    let per_day_amount = money_available.checked_div_days(days)?;

    info!(
        days,
        per_day = %per_day_amount.amount(),
        "allowance computed"
    );

    Ok(CalculationResult {
        next_payday: input.next_payday,
        spending_days_remaining: days,
        money_remaining: input.money_remaining,
        fixed_expenses: input.fixed_expenses,
        money_available,
        per_day_amount,
    })
}
