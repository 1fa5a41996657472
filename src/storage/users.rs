//! User repository for JSON storage
//!
//! Manages loading and saving users to users.json as a plain JSON array.

use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: Vec<User>,
    /// `None` once every id has been handed out
    next_id: Option<UserId>,
}

impl UserRepository {
    /// Create a new, empty user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
            next_id: Some(UserId::FIRST),
        }
    }

    /// Load users from disk
    pub fn load(&mut self) -> Result<(), FinanceError> {
        let users: Vec<User> = read_json(&self.path)?;

        self.next_id = users
            .iter()
            .map(|u| u.id)
            .max()
            .map_or(Some(UserId::FIRST), |max| max.next());
        self.data = users;

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, &self.data)
    }

    /// Hand out the next user id
    pub fn allocate_id(&mut self) -> FinanceResult<UserId> {
        let id = self.next_id.ok_or_else(|| {
            FinanceError::Overflow(format!("no user ids left in {}", self.path.display()))
        })?;
        self.next_id = id.next();
        Ok(id)
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.data.iter().find(|u| u.id == id)
    }

    /// Get all users in creation order
    pub fn get_all(&self) -> &[User] {
        &self.data
    }

    /// Append a user
    pub fn insert(&mut self, user: User) {
        if self.next_id.is_some_and(|next| user.id >= next) {
            self.next_id = user.id.next();
        }
        self.data.push(user);
    }

    /// Count users
    pub fn count(&self) -> usize {
        self.data.len()
    }
}
