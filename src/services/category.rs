//! Category service
//!
//! Categories can only be listed and appended to.

use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::CategoryList;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// The current categories in order
    pub fn list(&self) -> &CategoryList {
        self.storage.categories.get_all()
    }

    /// Append a new category
    ///
    /// An existing name is refused with a `Duplicate` error and nothing is
    /// written.
    pub fn add(&mut self, name: impl Into<String>) -> FinanceResult<()> {
        let name = name.into();
        if !self.storage.categories.add(name.clone()) {
            return Err(FinanceError::duplicate_category(name));
        }

        self.storage.save_all()?;

        info!(category = %name, "category added");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use tempfile::TempDir;

    #[test]
    fn test_add_and_duplicate() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(paths.clone()).unwrap();
        let mut service = CategoryService::new(&mut storage);

        service.add("Health").unwrap();
        assert_eq!(service.list().len(), 7);

        let err = service.add("Health").unwrap_err();
        assert!(err.is_duplicate());
        let err = service.add("Food").unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(service.list().len(), 7);

        let reloaded = Storage::open(paths).unwrap();
        assert_eq!(reloaded.categories.get_all().by_number(7), Some("Health"));
    }

    #[test]
    fn test_existing_expenses_keep_their_category() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.categories_file(), r#"["Food"]"#).unwrap();
        std::fs::write(
            paths.transactions_file(),
            r#"[{"id": 1, "amount": "3", "date": "2024-01-01T00:00:00",
                 "description": "", "kind": "expense", "category": "Gone"}]"#,
        )
        .unwrap();

        let mut storage = Storage::open(paths).unwrap();
        CategoryService::new(&mut storage).add("Rent").unwrap();

        assert_eq!(storage.transactions.get_all()[0].category(), Some("Gone"));
    }
}
