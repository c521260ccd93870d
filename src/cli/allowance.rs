//! Allowance CLI command
//!
//! Defines the command-line arguments and runs one calculation.

use chrono::NaiveDate;
use clap::Args;
use std::io::Write;

use crate::config::{OutputFormat, Settings};
use crate::display::{format_allowance_json, format_allowance_report};
use crate::error::{PaydayError, PaydayResult};
use crate::models::{parse_date, CalculationInput, CalculationResult, Money};
use crate::services::AllowanceCalculator;

/// Arguments describing one allowance calculation
#[derive(Args, Debug, Clone)]
pub struct AllowanceArgs {
    /// Date on which you will next be paid. Required format is YYYY-MM-DD e.g. 2069-07-24
    #[arg(
        short = 'p',
        long = "next_payday",
        alias = "next-payday",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date_arg
    )]
    pub next_payday: NaiveDate,

    /// Amount of money remaining (which needs to last you until your next payday)
    #[arg(
        short = 'm',
        long = "money_remaining",
        alias = "money-remaining",
        value_name = "AMOUNT",
        allow_hyphen_values = true,
        value_parser = parse_money_arg
    )]
    pub money_remaining: Money,

    /// Total pending payments (to be paid before your next payday) which are non-negotiable
    #[arg(
        short = 'f',
        long = "fixed_expenses",
        alias = "fixed-expenses",
        value_name = "AMOUNT",
        default_value = "0",
        allow_hyphen_values = true,
        value_parser = parse_money_arg
    )]
    pub fixed_expenses: Money,

    /// I still want to spend money today (i.e. it is the beginning of the day)
    #[arg(short = 't', long = "include_today", alias = "include-today")]
    pub include_today: bool,

    /// Evaluate as if today were this date instead of the system date
    #[arg(long, env = "PAYDAY_TODAY", value_name = "YYYY-MM-DD", value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,

    /// Currency symbol shown before amounts in the report
    #[arg(long, env = "PAYDAY_CURRENCY", value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AllowanceArgs {
    /// The calculation input described by these arguments
    pub fn input(&self) -> CalculationInput {
        CalculationInput::new(self.next_payday, self.money_remaining)
            .with_fixed_expenses(self.fixed_expenses)
            .with_include_today(self.include_today)
    }

    /// Report settings described by these arguments
    pub fn settings(&self) -> Settings {
        Settings::new(self.currency.clone(), self.json)
    }

    /// Calculator for the overridden date, or the system clock
    pub fn calculator(&self) -> AllowanceCalculator {
        match self.today {
            Some(today) => AllowanceCalculator::new(today),
            None => AllowanceCalculator::from_system_clock(),
        }
    }
}

/// Value parser for date flags
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, PaydayError> {
    parse_date(s)
}

/// Value parser for amount flags
pub fn parse_money_arg(s: &str) -> Result<Money, PaydayError> {
    Money::parse(s)
}

/// Run the calculation and render it in the configured format
pub fn run_allowance(args: &AllowanceArgs) -> PaydayResult<String> {
    let result = args.calculator().compute(&args.input())?;
    render(&result, &args.settings())
}

/// Render a result according to the settings
pub fn render(result: &CalculationResult, settings: &Settings) -> PaydayResult<String> {
    match settings.output_format {
        OutputFormat::Text => Ok(format_allowance_report(result, settings)),
        OutputFormat::Json => format_allowance_json(result),
    }
}

/// Handle the allowance command, writing the report to `out`
pub fn handle_allowance_command(args: &AllowanceArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let report = run_allowance(args)?;
    writeln!(out, "{}", report.trim_end())?;
    Ok(())
}
