//! Work of art domain service.
//!
//! Implements the work of art driving ports over a [`WorkOfArtRepository`].
//! Listings are sorted here rather than in adapters so every store yields the
//! same newest-first order.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    WorkOfArtCommand, WorkOfArtPersistenceError, WorkOfArtQuery, WorkOfArtRepository,
};
use crate::domain::{
    Error, Medium, User, UserId, UserName, WorkOfArt, WorkOfArtContent, WorkOfArtId,
    WorkOfArtSubmission, WorkOfArtSummary,
};

/// Work of art service implementing the query and command driving ports.
#[derive(Clone)]
pub struct WorkOfArtService<W> {
    works: Arc<W>,
    clock: Arc<dyn Clock>,
}

impl<W> WorkOfArtService<W> {
    /// Create a new service backed by `works`, stamping creations from `clock`.
    pub fn new(works: Arc<W>, clock: Arc<dyn Clock>) -> Self {
        Self { works, clock }
    }
}

impl<W> WorkOfArtService<W>
where
    W: WorkOfArtRepository,
{
    fn map_persistence_error(error: WorkOfArtPersistenceError) -> Error {
        match error {
            WorkOfArtPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("work of art repository unavailable: {message}"))
            }
            WorkOfArtPersistenceError::Query { message } => {
                Error::internal(format!("work of art repository error: {message}"))
            }
        }
    }

    fn summaries(mut works: Vec<WorkOfArt>) -> Vec<WorkOfArtSummary> {
        works.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        works.into_iter().map(WorkOfArtSummary::from).collect()
    }

    async fn find(&self, id: &WorkOfArtId) -> Result<Option<WorkOfArt>, Error> {
        self.works
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_owned(&self, id: &WorkOfArtId, acting: &UserName) -> Result<WorkOfArt, Error> {
        let work = self
            .find(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("work of art {id} not found")))?;
        if !work.is_owned_by(acting) {
            debug!(work_id = %id, owner = %work.user_name, acting = %acting, "work of art change denied");
            return Err(Error::forbidden("you can change only your own work of art"));
        }
        Ok(work)
    }

    async fn store(&self, work: &WorkOfArt) -> Result<(), Error> {
        self.works
            .save(work)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<W> WorkOfArtQuery for WorkOfArtService<W>
where
    W: WorkOfArtRepository,
{
    async fn fetch(&self, id: &WorkOfArtId) -> Result<Option<WorkOfArt>, Error> {
        self.find(id).await
    }

    async fn list_all(&self, mediums: &[Medium]) -> Result<Vec<WorkOfArtSummary>, Error> {
        let works = self
            .works
            .find_all(mediums)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(Self::summaries(works))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WorkOfArtSummary>, Error> {
        let works = self
            .works
            .find_by_owner(user_id)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(Self::summaries(works))
    }
}

#[async_trait]
impl<W> WorkOfArtCommand for WorkOfArtService<W>
where
    W: WorkOfArtRepository,
{
    async fn create(
        &self,
        submission: WorkOfArtSubmission,
        author: &User,
    ) -> Result<WorkOfArt, Error> {
        let content = WorkOfArtContent::try_from(submission)?;
        let work = WorkOfArt::new(WorkOfArtId::random(), author, content, self.clock.utc());
        self.store(&work).await?;
        info!(work_id = %work.id, owner = %work.user_name, "work of art published");
        Ok(work)
    }

    async fn update(
        &self,
        id: &WorkOfArtId,
        submission: WorkOfArtSubmission,
        acting: &UserName,
    ) -> Result<WorkOfArt, Error> {
        let existing = self.find_owned(id, acting).await?;
        let content = WorkOfArtContent::try_from(submission)?;
        let revised = existing.revise(content);
        self.store(&revised).await?;
        Ok(revised)
    }

    async fn delete(&self, id: &WorkOfArtId, acting: &UserName) -> Result<WorkOfArtId, Error> {
        self.find_owned(id, acting).await?;
        let removed = self
            .works
            .delete(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if !removed {
            return Err(Error::not_found(format!("work of art {id} not found")));
        }
        info!(work_id = %id, "work of art deleted");
        Ok(*id)
    }
}

#[cfg(test)]
#[path = "work_of_art_service_tests.rs"]
mod tests;
