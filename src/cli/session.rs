//! Application state for one interactive run
//!
//! A `Session` owns the loaded collections and the active user selection and
//! is threaded through the command layer explicitly.

use tracing::debug;

use crate::config::paths::FinancePaths;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{User, UserId};
use crate::storage::Storage;

/// Loaded data plus the session-scoped active user
pub struct Session {
    storage: Storage,
    active_user: Option<UserId>,
}

impl Session {
    /// Start a session over already-loaded storage with no active user
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            active_user: None,
        }
    }

    /// Open the data directory and load every collection
    pub fn open(paths: FinancePaths) -> FinanceResult<Self> {
        Ok(Self::new(Storage::open(paths)?))
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    /// The active user's id, if one was selected
    pub fn active_user_id(&self) -> Option<UserId> {
        self.active_user
    }

    /// The active user record, if one was selected
    pub fn active_user(&self) -> Option<&User> {
        self.active_user.and_then(|id| self.storage.users.get(id))
    }

    /// Make `id` the active user
    ///
    /// An unknown id leaves the previous selection in place.
    pub fn select_user(&mut self, id: UserId) -> FinanceResult<&User> {
        let user = self
            .storage
            .users
            .get(id)
            .ok_or_else(|| FinanceError::user_not_found(id.to_string()))?;

        debug!(id = %id, "active user selected");
        self.active_user = Some(id);

        Ok(user)
    }

    /// Fail with `NoActiveUser` unless a user is selected
    pub fn require_active_user(&self) -> FinanceResult<&User> {
        self.active_user().ok_or(FinanceError::NoActiveUser)
    }

    /// Write every collection back to disk
    pub fn save(&self) -> FinanceResult<()> {
        self.storage.save_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_session(temp_dir: &TempDir) -> Session {
        Session::open(FinancePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_starts_without_active_user() {
        let temp_dir = TempDir::new().unwrap();
        let session = open_session(&temp_dir);

        assert!(session.active_user().is_none());
        assert!(matches!(
            session.require_active_user(),
            Err(FinanceError::NoActiveUser)
        ));
    }

    #[test]
    fn test_select_user() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);
        let id = session.storage_mut().users.allocate_id().unwrap();
        session
            .storage_mut()
            .users
            .insert(User::new(id, "alice", "alice@example.com"));

        assert_eq!(session.select_user(id).unwrap().username, "alice");
        assert_eq!(session.active_user_id(), Some(id));
        assert_eq!(session.require_active_user().unwrap().id, id);
    }

    #[test]
    fn test_unknown_user_keeps_previous_selection() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);
        let id = session.storage_mut().users.allocate_id().unwrap();
        session
            .storage_mut()
            .users
            .insert(User::new(id, "alice", "alice@example.com"));
        session.select_user(id).unwrap();

        let err = session.select_user(UserId::new(42)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(session.active_user_id(), Some(id));
    }
}
