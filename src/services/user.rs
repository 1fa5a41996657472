//! User service
//!
//! Users can be created, listed and looked up; nothing else.

use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{User, UserId};
use crate::storage::Storage;

/// Service for user management
pub struct UserService<'a> {
    storage: &'a mut Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new user
    ///
    /// Username and email are stored exactly as entered.
    pub fn create(
        &mut self,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> FinanceResult<User> {
        let user = User::new(self.storage.users.allocate_id()?, username, email);

        self.storage.users.insert(user.clone());
        self.storage.save_all()?;

        info!(id = %user.id, username = %user.username, "user created");

        Ok(user)
    }

    /// Find a user by ID, failing if it does not exist
    pub fn find(&self, id: UserId) -> FinanceResult<&User> {
        self.storage
            .users
            .get(id)
            .ok_or_else(|| FinanceError::user_not_found(id.to_string()))
    }

    /// List all users in creation order
    pub fn list(&self) -> &[User] {
        self.storage.users.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_find() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(paths.clone()).unwrap();
        let mut service = UserService::new(&mut storage);

        let alice = service.create("alice", "alice@example.com").unwrap();
        let bob = service.create("bob", "bob@example.com").unwrap();

        assert_eq!(alice.id, UserId::new(1));
        assert_eq!(bob.id, UserId::new(2));
        assert_eq!(service.find(bob.id).unwrap().username, "bob");
        assert_eq!(service.list().len(), 2);

        let reloaded = Storage::open(paths).unwrap();
        assert_eq!(reloaded.users.get_all(), &[alice, bob]);
    }

    #[test]
    fn test_find_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(paths).unwrap();
        let service = UserService::new(&mut storage);

        let err = service.find(UserId::new(9)).unwrap_err();
        assert_eq!(err.to_string(), "User not found: 9");
    }
}
