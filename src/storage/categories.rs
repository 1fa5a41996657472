//! Category repository for JSON storage
//!
//! Manages loading and saving the category list to categories.json. A
//! missing file yields the default categories.

use std::path::PathBuf;

use crate::error::FinanceError;
use crate::models::CategoryList;

use super::file_io::{read_json, write_json_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: CategoryList,
}

impl CategoryRepository {
    /// Create a repository holding the default categories
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: CategoryList::default(),
        }
    }

    /// Load categories from disk
    pub fn load(&mut self) -> Result<(), FinanceError> {
        self.categories = read_json(&self.path)?;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, &self.categories)
    }

    /// The current category list
    pub fn get_all(&self) -> &CategoryList {
        &self.categories
    }

    /// Append a category; false if it already exists
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.categories.add(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo.load().unwrap();

        assert_eq!(repo.get_all(), &CategoryList::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");

        let mut repo = CategoryRepository::new(path.clone());
        repo.load().unwrap();
        assert!(repo.add("Health"));
        assert!(!repo.add("Health"));
        repo.save().unwrap();

        let mut repo2 = CategoryRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().len(), 7);
        assert!(repo2.get_all().contains("Health"));
    }

    #[test]
    fn test_file_replaces_defaults_entirely() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        std::fs::write(&path, r#"["Rent"]"#).unwrap();

        let mut repo = CategoryRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.get_all().iter().collect::<Vec<_>>(), vec!["Rent"]);
    }
}
