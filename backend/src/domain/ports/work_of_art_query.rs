//! Driving port for reading works of art.

use async_trait::async_trait;

use crate::domain::{Error, Medium, UserId, WorkOfArt, WorkOfArtId, WorkOfArtSummary};

/// Domain use-case port for work of art lookups and listings.
///
/// Listings are ordered newest `created_at` first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkOfArtQuery: Send + Sync {
    /// Return the full work, or `None` when nothing is stored under `id`.
    async fn fetch(&self, id: &WorkOfArtId) -> Result<Option<WorkOfArt>, Error>;

    /// List works in any of `mediums`; an empty slice lists everything.
    async fn list_all(&self, mediums: &[Medium]) -> Result<Vec<WorkOfArtSummary>, Error>;

    /// List works owned by `user_id`.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WorkOfArtSummary>, Error>;
}
