//! Port abstraction for work of art persistence adapters.
//!
//! Adapters store whole documents: materials travel with their work and are
//! never addressed on their own.

use async_trait::async_trait;

use crate::domain::{Medium, UserId, WorkOfArt, WorkOfArtId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by work of art repository adapters.
    pub enum WorkOfArtPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "work of art repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "work of art repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkOfArtRepository: Send + Sync {
    /// Fetch a single work of art.
    async fn find_by_id(
        &self,
        id: &WorkOfArtId,
    ) -> Result<Option<WorkOfArt>, WorkOfArtPersistenceError>;

    /// Fetch every work whose medium is in `mediums`, or every work when the
    /// slice is empty. Order is unspecified.
    async fn find_all(&self, mediums: &[Medium])
    -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError>;

    /// Fetch every work owned by `user_id`. Order is unspecified.
    async fn find_by_owner(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError>;

    /// Insert or replace a work keyed by its id.
    async fn save(&self, work: &WorkOfArt) -> Result<(), WorkOfArtPersistenceError>;

    /// Remove a work. Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: &WorkOfArtId) -> Result<bool, WorkOfArtPersistenceError>;
}
