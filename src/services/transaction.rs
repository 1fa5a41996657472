//! Transaction service
//!
//! Provides business logic for transaction management: creating incomes and
//! expenses, editing, and deleting. Every mutation is persisted immediately.

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionDetails, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub date: NaiveDateTime,
    pub description: String,
    pub details: TransactionDetails,
}

/// Changes to apply to an existing transaction
///
/// `None` leaves a field untouched. `detail` is the variant-specific field:
/// the source of an income or the category of an expense.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub detail: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    ///
    /// Expense categories must be in the current category list. The check is
    /// only made here; later category changes never touch stored expenses.
    pub fn create(&mut self, input: CreateTransactionInput) -> FinanceResult<Transaction> {
        if let TransactionDetails::Expense { category } = &input.details {
            self.ensure_category(category)?;
        }

        let txn = Transaction {
            id: self.storage.transactions.allocate_id()?,
            amount: input.amount,
            date: input.date,
            description: input.description,
            details: input.details,
        };

        self.storage.transactions.insert(txn.clone());
        self.storage.save_all()?;

        info!(id = %txn.id, kind = %txn.kind(), amount = %txn.amount, "transaction created");

        Ok(txn)
    }

    /// Record an income
    pub fn add_income(
        &mut self,
        amount: Money,
        source: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> FinanceResult<Transaction> {
        self.create(CreateTransactionInput {
            amount,
            date,
            description: description.into(),
            details: TransactionDetails::Income {
                source: source.into(),
            },
        })
    }

    /// Record an expense against an existing category
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> FinanceResult<Transaction> {
        self.create(CreateTransactionInput {
            amount,
            date,
            description: description.into(),
            details: TransactionDetails::Expense {
                category: category.into(),
            },
        })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.storage.transactions.get(id)
    }

    /// Get a transaction by ID, failing if it does not exist
    pub fn find(&self, id: TransactionId) -> FinanceResult<&Transaction> {
        self.get(id)
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))
    }

    /// List all transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        self.storage.transactions.get_all()
    }

    /// Update an existing transaction
    pub fn update(
        &mut self,
        id: TransactionId,
        update: TransactionUpdate,
    ) -> FinanceResult<Transaction> {
        if let Some(category) = &update.detail {
            let is_expense = self.find(id)?.is_expense();
            if is_expense {
                self.ensure_category(category)?;
            }
        }

        let txn = self
            .storage
            .transactions
            .get_mut(id)
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        if let Some(amount) = update.amount {
            txn.amount = amount;
        }

        if let Some(description) = update.description {
            txn.description = description;
        }

        if let Some(detail) = update.detail {
            match &mut txn.details {
                TransactionDetails::Income { source } => *source = detail,
                TransactionDetails::Expense { category } => *category = detail,
            }
        }

        let txn = txn.clone();
        self.storage.save_all()?;

        info!(id = %txn.id, amount = %txn.amount, "transaction updated");

        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&mut self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete(id)
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        self.storage.save_all()?;

        info!(id = %txn.id, "transaction deleted");

        Ok(txn)
    }

    /// Count transactions
    pub fn count(&self) -> usize {
        self.storage.transactions.count()
    }

    fn ensure_category(&self, category: &str) -> FinanceResult<()> {
        if self.storage.categories.get_all().contains(category) {
            Ok(())
        } else {
            Err(FinanceError::Validation(format!(
                "Unknown category '{}'",
                category
            )))
        }
    }
}
