//! Driving port for user profile mutations.
//!
//! Covers first-login provisioning and owner-only profile edits.

use async_trait::async_trait;

use crate::domain::{Error, ProfileUpdate, User, UserId, UserName};

/// Domain use-case port for creating and editing user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileCommand: Send + Sync {
    /// Return the user for `login`, creating an empty profile on first sight.
    ///
    /// Repeated calls with the same login return the stored record and write
    /// nothing.
    async fn find_or_create(&self, login: &UserName) -> Result<User, Error>;

    /// Overwrite bio, image and mediums for the user stored under `id`.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no user is stored under `id`.
    /// - `Forbidden` when `acting` is not that user's login.
    async fn update_profile(
        &self,
        id: &UserId,
        update: ProfileUpdate,
        acting: &UserName,
    ) -> Result<User, Error>;
}
