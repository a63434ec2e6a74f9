//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another record already owns the login name.
        DuplicateName { name: String } => "user name already taken: {name}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by login name.
    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError>;

    /// Store a new user.
    ///
    /// Fails with [`UserPersistenceError::DuplicateName`] when the name is
    /// already taken.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Overwrite the profile fields of an existing user.
    async fn update(&self, user: &User) -> Result<(), UserPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_name_mentions_the_name() {
        let err = UserPersistenceError::duplicate_name("octocat");
        assert_eq!(err.to_string(), "user name already taken: octocat");
    }
}
