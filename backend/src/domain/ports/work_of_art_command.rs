//! Driving port for publishing, editing and removing works of art.

use async_trait::async_trait;

use crate::domain::{Error, User, UserName, WorkOfArt, WorkOfArtId, WorkOfArtSubmission};

/// Domain use-case port for work of art mutations.
///
/// Only the login recorded as a work's owner may update or delete it. Other
/// callers receive `Forbidden` and the stored work is left untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkOfArtCommand: Send + Sync {
    /// Validate `submission` and publish it on behalf of `author`.
    async fn create(&self, submission: WorkOfArtSubmission, author: &User)
    -> Result<WorkOfArt, Error>;

    /// Replace the editable content of the work stored under `id`.
    async fn update(
        &self,
        id: &WorkOfArtId,
        submission: WorkOfArtSubmission,
        acting: &UserName,
    ) -> Result<WorkOfArt, Error>;

    /// Remove the work stored under `id` and return its id.
    async fn delete(&self, id: &WorkOfArtId, acting: &UserName) -> Result<WorkOfArtId, Error>;
}
