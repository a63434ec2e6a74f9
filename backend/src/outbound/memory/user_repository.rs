//! In-memory `UserRepository` keyed by id with a name index.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId, UserName};

#[derive(Default)]
struct UserTable {
    by_id: HashMap<UserId, User>,
    ids_by_name: HashMap<UserName, UserId>,
}

/// Process-local user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    ///
    /// # Errors
    /// Returns a query error when a writer panicked while holding the lock.
    pub fn len(&self) -> Result<usize, UserPersistenceError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.by_id.len())
    }

    /// # Errors
    /// Same as [`Self::len`].
    pub fn is_empty(&self) -> Result<bool, UserPersistenceError> {
        self.len().map(|count| count == 0)
    }
}

fn poisoned() -> UserPersistenceError {
    UserPersistenceError::query("user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.by_id.get(id).cloned())
    }

    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table
            .ids_by_name
            .get(name)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        if table.ids_by_name.contains_key(user.name()) {
            return Err(UserPersistenceError::duplicate_name(user.name().as_ref()));
        }
        table.ids_by_name.insert(user.name().clone(), *user.id());
        table.by_id.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        match table.by_id.get_mut(user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(UserPersistenceError::query("user not found for update")),
        }
    }
}
