//! Parsing of free-text answers typed at the shell prompts

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryList, Money};

/// Accepted date format for every date prompt
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an amount such as `150.25` or `$10`
pub fn parse_amount(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| FinanceError::Parse(e.to_string()))
}

/// Parse a numeric id or other integer answer
pub fn parse_number<T: FromStr>(input: &str) -> FinanceResult<T> {
    input
        .trim()
        .parse()
        .map_err(|_| FinanceError::Parse(format!("'{}' is not a number", input.trim())))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| FinanceError::Parse(format!("'{}' is not a YYYY-MM-DD date", input.trim())))
}

/// Parse the optional date asked for when recording a transaction
///
/// A blank answer means now. A given day is recorded at midnight.
pub fn parse_transaction_date(input: &str) -> FinanceResult<NaiveDateTime> {
    if input.trim().is_empty() {
        return Ok(Local::now().naive_local());
    }
    Ok(parse_date(input)?.and_time(NaiveTime::MIN))
}

/// Parse a month number in 1..=12
pub fn parse_month(input: &str) -> FinanceResult<u32> {
    let month: u32 = parse_number(input)?;
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(FinanceError::Parse(format!("month {} is out of range", month)))
    }
}

/// Resolve a 1-based category number to its name
pub fn select_category(categories: &CategoryList, input: &str) -> Option<String> {
    let number: usize = parse_number(input).ok()?;
    categories.by_number(number).map(str::to_string)
}
