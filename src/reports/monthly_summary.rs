//! Monthly Summary Report
//!
//! Totals income and expenses for one calendar month and compares them with
//! a text bar chart.

use chrono::Datelike;

use crate::display::report::{format_bar, BAR_LEGEND};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionDetails};

/// Income and expense totals for a single month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummaryReport {
    pub year: i32,
    pub month: u32,
    /// Sum of all income amounts dated in the month
    pub total_income: Money,
    /// Sum of all expense amounts dated in the month
    pub total_expense: Money,
    /// Income minus expenses
    pub balance: Money,
    /// Number of transactions that fell in the month
    pub transaction_count: usize,
}

impl MonthlySummaryReport {
    /// Generate the summary for `year`/`month`
    ///
    /// A month outside 1..=12 matches nothing and yields zero totals. Fails
    /// with `Overflow` when a total leaves the decimal range.
    pub fn generate(transactions: &[Transaction], year: i32, month: u32) -> FinanceResult<Self> {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut transaction_count = 0;

        for txn in transactions
            .iter()
            .filter(|t| t.date.year() == year && t.date.month() == month)
        {
            let (total, label) = match txn.details {
                TransactionDetails::Income { .. } => (&mut total_income, "monthly income total"),
                TransactionDetails::Expense { .. } => {
                    (&mut total_expense, "monthly expense total")
                }
            };
            *total = total
                .checked_add(txn.amount)
                .ok_or_else(|| FinanceError::Overflow(label.to_string()))?;
            transaction_count += 1;
        }

        let balance = total_income
            .checked_sub(total_expense)
            .ok_or_else(|| FinanceError::Overflow("monthly balance".to_string()))?;

        Ok(Self {
            year,
            month,
            total_income,
            total_expense,
            balance,
            transaction_count,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Monthly Summary for {}/{}\n",
            self.month, self.year
        ));
        output.push_str(&format!("Total Income: {}\n", self.total_income));
        output.push_str(&format!("Total Expenses: {}\n", self.total_expense));
        output.push_str(&format!("Balance: {}\n", self.balance));
        output.push('\n');
        output.push_str("Income vs Expense Bar Chart:\n");
        output.push_str(&format!("Income:   |{}\n", format_bar(self.total_income)));
        output.push_str(&format!("Expenses: |{}\n", format_bar(self.total_expense)));
        output.push_str(BAR_LEGEND);
        output.push('\n');

        output
    }
}
