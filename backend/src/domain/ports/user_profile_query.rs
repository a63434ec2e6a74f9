//! Driving port for user profile queries.
//!
//! Inbound adapters use this port to load profiles without importing
//! persistence details.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserName};

/// Domain use-case port for reading user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the profile stored under `id`, or `NotFound`.
    async fn fetch_by_id(&self, id: &UserId) -> Result<User, Error>;

    /// Return the profile for login `name`, or `NotFound`.
    async fn fetch_by_name(&self, name: &UserName) -> Result<User, Error>;
}
