//! User directory collaborator.
//!
//! The authentication subsystem never owns user storage; it consumes exactly
//! two capabilities through this trait: resolve a subject id to a user, and
//! check a username/password pair. Whatever sits behind it (a database, an
//! upstream identity service) is free to change without touching the token
//! path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resolved user reference attached to a request after validation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a subject id to a user, or `None` if no such user exists.
    async fn find_by_id(&self, id: i64) -> Option<User>;

    /// Check a username/password pair, returning the matching user.
    ///
    /// A miss never says whether the username or the password was wrong.
    async fn verify_credentials(&self, username: &str, password: &str) -> Option<User>;
}

/// In-process user directory.
///
/// Stand-in for the real persistence collaborator: read-mostly, safe to share
/// across request handlers. Secrets are held verbatim since credential
/// hashing belongs to the collaborator this replaces, not to the token path.
#[derive(Debug)]
pub struct MemoryUsers {
    entries: RwLock<HashMap<i64, (User, String)>>,
    next_id: AtomicI64,
}

impl Default for MemoryUsers {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUsers {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Add an account and return the created user.
    pub fn insert(&self, username: &str, password: &str) -> User {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = User {
            id,
            username: username.to_string(),
        };
        self.entries
            .write()
            .insert(id, (user.clone(), password.to_string()));
        debug!(user_id = id, "user added to directory");
        user
    }

    /// Drop an account. Outstanding tokens for it fail validation afterwards.
    pub fn remove(&self, id: i64) -> bool {
        self.entries.write().remove(&id).is_some()
    }
}

#[async_trait]
impl UserDirectory for MemoryUsers {
    async fn find_by_id(&self, id: i64) -> Option<User> {
        self.entries.read().get(&id).map(|(user, _)| user.clone())
    }

    async fn verify_credentials(&self, username: &str, password: &str) -> Option<User> {
        self.entries
            .read()
            .values()
            .find(|(user, stored)| user.username == username && stored == password)
            .map(|(user, _)| user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryUsers, UserDirectory};

    #[tokio::test]
    async fn test_find_by_id() {
        let users = MemoryUsers::new();
        let alice = users.insert("alice", "pw");

        assert_eq!(users.find_by_id(alice.id).await, Some(alice));
        assert_eq!(users.find_by_id(999).await, None);
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let users = MemoryUsers::new();
        let alice = users.insert("alice", "correct-pw");

        assert_eq!(
            users.verify_credentials("alice", "correct-pw").await,
            Some(alice)
        );
        assert_eq!(users.verify_credentials("alice", "wrong-pw").await, None);
        assert_eq!(users.verify_credentials("bob", "correct-pw").await, None);
    }

    #[tokio::test]
    async fn test_remove() {
        let users = MemoryUsers::new();
        let alice = users.insert("alice", "pw");

        assert!(users.remove(alice.id));
        assert!(!users.remove(alice.id));
        assert_eq!(users.find_by_id(alice.id).await, None);
    }
}
