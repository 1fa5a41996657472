//! Transaction model
//!
//! A transaction is either an income (with a source) or an expense (with a
//! category). Both share id, amount, date and description. On disk the
//! variant is recorded explicitly in a `kind` field:
//!
//! ```json
//! {"id": 1, "amount": "1000", "date": "2024-01-01T09:00:00",
//!  "description": "Salary", "kind": "income", "source": "Employer"}
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Variant-specific data of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransactionDetails {
    /// Money coming in, tagged with where it came from
    Income { source: String },
    /// Money going out, tagged with a category name
    Expense { category: String },
}

/// Which of the two transaction shapes a record has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always recorded as entered (expenses are not negated)
    pub amount: Money,

    /// When the transaction happened (local time)
    pub date: NaiveDateTime,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Income or expense data
    #[serde(flatten)]
    pub details: TransactionDetails,
}

impl Transaction {
    /// Create a new income transaction
    pub fn income(
        id: TransactionId,
        amount: Money,
        date: NaiveDateTime,
        source: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            date,
            description: description.into(),
            details: TransactionDetails::Income {
                source: source.into(),
            },
        }
    }

    /// Create a new expense transaction
    pub fn expense(
        id: TransactionId,
        amount: Money,
        date: NaiveDateTime,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            date,
            description: description.into(),
            details: TransactionDetails::Expense {
                category: category.into(),
            },
        }
    }

    /// The transaction variant
    pub fn kind(&self) -> TransactionKind {
        match self.details {
            TransactionDetails::Income { .. } => TransactionKind::Income,
            TransactionDetails::Expense { .. } => TransactionKind::Expense,
        }
    }

    /// Check if this is an income
    pub fn is_income(&self) -> bool {
        self.kind() == TransactionKind::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    /// The expense category, if this is an expense
    pub fn category(&self) -> Option<&str> {
        match &self.details {
            TransactionDetails::Expense { category } => Some(category),
            TransactionDetails::Income { .. } => None,
        }
    }

    /// The income source, if this is an income
    pub fn source(&self) -> Option<&str> {
        match &self.details {
            TransactionDetails::Income { source } => Some(source),
            TransactionDetails::Expense { .. } => None,
        }
    }

    /// Contribution of this transaction to a running balance
    pub fn signed_amount(&self) -> Money {
        match self.details {
            TransactionDetails::Income { .. } => self.amount,
            TransactionDetails::Expense { .. } => -self.amount,
        }
    }

    /// Calendar day of the transaction
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, value) = match &self.details {
            TransactionDetails::Income { source } => ("Source", source),
            TransactionDetails::Expense { category } => ("Category", category),
        };
        write!(
            f,
            "ID: {}, Type: {}, Amount: {}, {}: {}, Date: {}, Desc: {}",
            self.id,
            self.kind(),
            self.amount,
            label,
            value,
            self.date.format("%Y-%m-%d %H:%M"),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_variants() {
        let income = Transaction::income(
            TransactionId::new(1),
            Money::from_units(1000),
            at(2024, 1, 1),
            "Employer",
            "Salary",
        );
        assert!(income.is_income());
        assert_eq!(income.source(), Some("Employer"));
        assert_eq!(income.category(), None);
        assert_eq!(income.signed_amount(), Money::from_units(1000));

        let expense = Transaction::expense(
            TransactionId::new(2),
            Money::from_units(200),
            at(2024, 1, 15),
            "Food",
            "Groceries",
        );
        assert!(expense.is_expense());
        assert_eq!(expense.category(), Some("Food"));
        assert_eq!(expense.signed_amount(), Money::from_units(-200));
        assert_eq!(expense.day(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_serialization_has_explicit_kind() {
        let expense = Transaction::expense(
            TransactionId::new(5),
            Money::parse("99.99").unwrap(),
            at(2024, 3, 2),
            "Bills",
            "Power",
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["kind"], "expense");
        assert_eq!(json["category"], "Bills");
        assert_eq!(json["amount"], "99.99");
        assert_eq!(json["id"], 5);
        assert!(json.get("source").is_none());

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_deserialize_income_document() {
        let raw = r#"{
            "id": 3,
            "amount": "500",
            "date": "2024-02-01T08:30:00",
            "description": "Bonus",
            "kind": "income",
            "source": "Employer"
        }"#;
        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(txn.id, TransactionId::new(3));
        assert_eq!(txn.source(), Some("Employer"));
        assert_eq!(txn.amount, Money::from_units(500));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let raw = r#"{"id": 1, "amount": "5", "date": "2024-02-01T08:30:00",
                      "description": "", "kind": "transfer"}"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn test_display() {
        let income = Transaction::income(
            TransactionId::new(1),
            Money::from_units(1000),
            at(2024, 1, 1),
            "Employer",
            "Salary",
        );
        assert_eq!(
            income.to_string(),
            "ID: 1, Type: Income, Amount: 1000, Source: Employer, Date: 2024-01-01 12:00, Desc: Salary"
        );
    }
}
