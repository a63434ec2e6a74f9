//! PostgreSQL-backed `WorkOfArtRepository` implementation using Diesel ORM.
//!
//! Materials are stored as a JSONB array on the work row and decoded with
//! the domain's serde representation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{WorkOfArtPersistenceError, WorkOfArtRepository};
use crate::domain::{Material, Medium, UserId, UserName, WorkOfArt, WorkOfArtId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewWorkOfArtRow, WorkOfArtChangeset, WorkOfArtRow};
use super::pool::{DbPool, PoolError};
use super::schema::works_of_art;

/// Diesel-backed implementation of the [`WorkOfArtRepository`] port.
#[derive(Clone)]
pub struct DieselWorkOfArtRepository {
    pool: DbPool,
}

impl DieselWorkOfArtRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> WorkOfArtPersistenceError {
    WorkOfArtPersistenceError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> WorkOfArtPersistenceError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => WorkOfArtPersistenceError::connection(message),
        DieselFailure::Query(message) => WorkOfArtPersistenceError::query(message),
        DieselFailure::UniqueViolation => {
            WorkOfArtPersistenceError::query("work of art already exists")
        }
    }
}

fn row_to_work(row: WorkOfArtRow) -> Result<WorkOfArt, WorkOfArtPersistenceError> {
    let medium: Medium = row.medium.parse().map_err(|err| {
        WorkOfArtPersistenceError::query(format!("stored work {} has {err}", row.id))
    })?;
    let materials: Vec<Material> = serde_json::from_value(row.materials).map_err(|err| {
        WorkOfArtPersistenceError::query(format!("stored materials for {} invalid: {err}", row.id))
    })?;
    let user_name = UserName::new(row.user_name).map_err(|err| {
        WorkOfArtPersistenceError::query(format!("stored owner name for {} invalid: {err}", row.id))
    })?;

    Ok(WorkOfArt {
        id: WorkOfArtId::from_uuid(row.id),
        user_id: UserId::from_uuid(row.user_id),
        user_name,
        challenge_id: row.challenge_id,
        title: row.title,
        description: row.description,
        image_url: row.image_url,
        medium,
        materials,
        created_at: row.created_at,
    })
}

fn rows_to_works(rows: Vec<WorkOfArtRow>) -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError> {
    rows.into_iter().map(row_to_work).collect()
}

fn encode_materials(work: &WorkOfArt) -> Result<serde_json::Value, WorkOfArtPersistenceError> {
    serde_json::to_value(&work.materials).map_err(|err| {
        WorkOfArtPersistenceError::query(format!("failed to encode materials: {err}"))
    })
}

#[async_trait]
impl WorkOfArtRepository for DieselWorkOfArtRepository {
    async fn find_by_id(
        &self,
        id: &WorkOfArtId,
    ) -> Result<Option<WorkOfArt>, WorkOfArtPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = works_of_art::table
            .filter(works_of_art::id.eq(id.as_uuid()))
            .select(WorkOfArtRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_work).transpose()
    }

    async fn find_all(
        &self,
        mediums: &[Medium],
    ) -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = works_of_art::table
            .select(WorkOfArtRow::as_select())
            .into_boxed();
        if !mediums.is_empty() {
            let labels: Vec<&str> = mediums.iter().map(|medium| medium.as_str()).collect();
            query = query.filter(works_of_art::medium.eq_any(labels));
        }
        let rows = query
            .order(works_of_art::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_works(rows)
    }

    async fn find_by_owner(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<WorkOfArt>, WorkOfArtPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = works_of_art::table
            .filter(works_of_art::user_id.eq(user_id.as_uuid()))
            .order(works_of_art::created_at.desc())
            .select(WorkOfArtRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_works(rows)
    }

    async fn save(&self, work: &WorkOfArt) -> Result<(), WorkOfArtPersistenceError> {
        let materials = encode_materials(work)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewWorkOfArtRow {
            id: *work.id.as_uuid(),
            user_id: *work.user_id.as_uuid(),
            user_name: work.user_name.as_ref(),
            challenge_id: work.challenge_id.as_deref(),
            title: &work.title,
            description: work.description.as_deref(),
            image_url: &work.image_url,
            medium: work.medium.as_str(),
            materials: materials.clone(),
            created_at: work.created_at,
        };
        let changes = WorkOfArtChangeset {
            challenge_id: work.challenge_id.as_deref(),
            title: &work.title,
            description: work.description.as_deref(),
            image_url: &work.image_url,
            medium: work.medium.as_str(),
            materials,
        };
        diesel::insert_into(works_of_art::table)
            .values(&row)
            .on_conflict(works_of_art::id)
            .do_update()
            .set(&changes)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &WorkOfArtId) -> Result<bool, WorkOfArtPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(works_of_art::table.filter(works_of_art::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
