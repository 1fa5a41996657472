//! Daily Balance Report
//!
//! Cumulative balance of every transaction up to and including a day.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction};

/// Running balance as of the end of a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBalanceReport {
    pub date: NaiveDate,
    /// Income minus expenses dated on or before `date`
    pub balance: Money,
    /// Number of transactions counted
    pub transaction_count: usize,
}

impl DailyBalanceReport {
    /// Generate the balance as of `date`; there is no lower bound
    ///
    /// Fails with `Overflow` when the running balance leaves the decimal range.
    pub fn generate(transactions: &[Transaction], date: NaiveDate) -> FinanceResult<Self> {
        let counted: Vec<&Transaction> = transactions.iter().filter(|t| t.day() <= date).collect();

        let balance = Money::checked_sum(counted.iter().map(|t| t.signed_amount()))
            .ok_or_else(|| FinanceError::Overflow(format!("balance as of {}", date)))?;

        Ok(Self {
            date,
            balance,
            transaction_count: counted.len(),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        format!(
            "Balance as of {}: {}\n",
            self.date.format("%Y-%m-%d"),
            self.balance
        )
    }
}
