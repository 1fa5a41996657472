//! Storage layer for the finance tracker
//!
//! Three independent JSON documents (users, transactions, categories), each
//! loaded whole at startup and rewritten whole on save. There is no locking:
//! two processes sharing a data directory overwrite each other.

pub mod categories;
pub mod file_io;
pub mod transactions;
pub mod users;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use tracing::debug;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinancePaths,
    pub users: UserRepository,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance holding default (empty) collections
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Create a Storage and load everything from disk
    pub fn open(paths: FinancePaths) -> Result<Self, FinanceError> {
        let mut storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Missing files leave the built-in defaults in place; a malformed file
    /// aborts the load.
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.users.load()?;
        self.transactions.load()?;
        self.categories.load()?;
        debug!(
            users = self.users.count(),
            transactions = self.transactions.count(),
            categories = self.categories.get_all().len(),
            "data loaded"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinanceError> {
        self.users.save()?;
        self.transactions.save()?;
        self.categories.save()?;
        Ok(())
    }
}
