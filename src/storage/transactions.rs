//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The file
//! holds a plain JSON array of transactions in insertion order.

use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for transaction persistence
///
/// Lookups are linear scans by id; collections are expected to stay small.
pub struct TransactionRepository {
    path: PathBuf,
    data: Vec<Transaction>,
    /// `None` once every id has been handed out
    next_id: Option<TransactionId>,
}

impl TransactionRepository {
    /// Create a new, empty transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
            next_id: Some(TransactionId::FIRST),
        }
    }

    /// Load transactions from disk
    ///
    /// The next id becomes one past the highest id in the file.
    pub fn load(&mut self) -> Result<(), FinanceError> {
        let transactions: Vec<Transaction> = read_json(&self.path)?;

        self.next_id = transactions
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(Some(TransactionId::FIRST), |max| max.next());
        self.data = transactions;

        Ok(())
    }

    /// Save transactions to disk, replacing the previous content
    pub fn save(&self) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, &self.data)
    }

    /// Hand out the next id; ids are never handed out twice by one repository
    pub fn allocate_id(&mut self) -> FinanceResult<TransactionId> {
        let id = self.next_id.ok_or_else(|| {
            FinanceError::Overflow(format!("no transaction ids left in {}", self.path.display()))
        })?;
        self.next_id = id.next();
        Ok(id)
    }

    /// The id the next call to `allocate_id` returns
    pub fn peek_next_id(&self) -> Option<TransactionId> {
        self.next_id
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.data.iter().find(|t| t.id == id)
    }

    /// Get a mutable transaction by ID
    pub fn get_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.data.iter_mut().find(|t| t.id == id)
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> &[Transaction] {
        &self.data
    }

    /// Append a transaction
    pub fn insert(&mut self, txn: Transaction) {
        if self.next_id.is_some_and(|next| txn.id >= next) {
            self.next_id = txn.id.next();
        }
        self.data.push(txn);
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.data.iter().position(|t| t.id == id)?;
        Some(self.data.remove(index))
    }

    /// Count transactions
    pub fn count(&self) -> usize {
        self.data.len()
    }
}
