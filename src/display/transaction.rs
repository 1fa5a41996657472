//! Transaction display formatting
//!
//! Formats transactions for terminal output as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Source/Category")]
    detail: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            kind: txn.kind().to_string(),
            amount: txn.amount.to_string(),
            detail: txn
                .source()
                .or_else(|| txn.category())
                .unwrap_or_default()
                .to_string(),
            date: txn.date.format("%Y-%m-%d %H:%M").to_string(),
            description: txn.description.clone(),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(transactions.iter().map(TransactionRow::from));
    table.with(Style::psql());

    format!("Transactions List:\n{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_transaction_list(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_list_contains_both_variants() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let txns = vec![
            Transaction::income(
                TransactionId::new(1),
                Money::from_units(1000),
                date,
                "Employer",
                "Salary",
            ),
            Transaction::expense(
                TransactionId::new(2),
                Money::parse("99.99").unwrap(),
                date,
                "Food",
                "Lunch",
            ),
        ];

        let output = format_transaction_list(&txns);
        assert!(output.starts_with("Transactions List:"));
        assert!(output.contains("Income"));
        assert!(output.contains("Employer"));
        assert!(output.contains("Expense"));
        assert!(output.contains("99.99"));
        assert!(output.contains("Food"));
        assert!(output.contains("2024-01-01 09:30"));
    }
}
