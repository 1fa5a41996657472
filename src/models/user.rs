//! User model
//!
//! Users are created from the shell and never edited or deleted. The active
//! user is a session-only pointer and does not own any transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub username: String,

    /// Contact email, stored as entered
    pub email: String,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Username: {}, Email: {}",
            self.id, self.username, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let user = User::new(UserId::new(1), "alice", "alice@example.com");
        assert_eq!(
            user.to_string(),
            "ID: 1, Username: alice, Email: alice@example.com"
        );
    }

    #[test]
    fn test_serialization_field_names() {
        let user = User::new(UserId::new(2), "bob", "bob@example.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["username"], "bob");
        assert_eq!(json["email"], "bob@example.com");
    }
}
