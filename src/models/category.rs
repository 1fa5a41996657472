//! Category list model
//!
//! Expense categories are plain names kept in insertion order. The list is
//! seeded with a fixed set of defaults and only ever grows: names cannot be
//! renamed or removed, and exact duplicates are refused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories every new data directory starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Transportation,
    Bills,
    Shopping,
    Entertainment,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Bills,
            Self::Shopping,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

/// Ordered, duplicate-free list of category names
///
/// Stored as a plain JSON array; duplicates in a loaded file are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryList(Vec<String>);

impl CategoryList {
    /// An empty list (no defaults)
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a list from names, dropping later duplicates
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::empty();
        for name in names {
            list.add(name);
        }
        list
    }

    /// Append a category; returns false and leaves the list unchanged if it
    /// already contains the name
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    /// Look up a category by its 1-based position as shown in menus
    pub fn by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .map(String::as_str)
    }

    /// Iterate names in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategoryList {
    fn default() -> Self {
        Self::from_names(DefaultCategory::all().iter().map(DefaultCategory::name))
    }
}

impl From<Vec<String>> for CategoryList {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<CategoryList> for Vec<String> {
    fn from(list: CategoryList) -> Self {
        list.0
    }
}

impl fmt::Display for CategoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, name)?;
        }
        Ok(())
    }
}
