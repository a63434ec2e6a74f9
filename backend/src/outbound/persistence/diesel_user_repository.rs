//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Medium, User, UserId, UserName};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewUserRow, UserProfileChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.message())
}

fn map_diesel_error(error: &diesel::result::Error, name: &str) -> UserPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::UniqueViolation => UserPersistenceError::duplicate_name(name),
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let name = UserName::new(row.name)
        .map_err(|err| UserPersistenceError::query(format!("stored user name invalid: {err}")))?;
    let mediums = Medium::normalize_all(&row.mediums);
    if mediums.len() != row.mediums.len() {
        warn!(user_id = %row.id, "dropped unrecognised stored mediums");
    }
    Ok(User::restore(
        UserId::from_uuid(row.id),
        name,
        row.bio,
        row.image_url,
        mediums,
    ))
}

fn medium_labels(user: &User) -> Vec<String> {
    user.mediums()
        .iter()
        .map(|medium| medium.as_str().to_owned())
        .collect()
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(&err, ""))?;
        row.map(row_to_user).transpose()
    }

    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::name.eq(name.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(&err, name.as_ref()))?;
        row.map(row_to_user).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            bio: user.bio(),
            image_url: user.image_url(),
            mediums: medium_labels(user),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(&err, user.name().as_ref()))
    }

    async fn update(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = UserProfileChangeset {
            bio: user.bio(),
            image_url: user.image_url(),
            mediums: medium_labels(user),
        };
        let updated = diesel::update(users::table.filter(users::id.eq(user.id().as_uuid())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err, user.name().as_ref()))?;
        if updated == 0 {
            return Err(UserPersistenceError::query("user not found for update"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; query behaviour needs a live database.
    use super::*;
    use uuid::Uuid;

    #[test]
    fn row_to_user_drops_unknown_mediums() {
        let row = UserRow {
            id: Uuid::new_v4(),
            name: "octocat".to_owned(),
            bio: Some("Painter".to_owned()),
            image_url: None,
            mediums: vec!["oil".to_owned(), "clay".to_owned(), "ink".to_owned()],
        };
        let user = row_to_user(row).expect("valid row");
        assert_eq!(user.mediums(), &[Medium::Oil, Medium::Ink]);
        assert_eq!(user.image_url(), None);
    }

    #[test]
    fn row_to_user_rejects_blank_name() {
        let row = UserRow {
            id: Uuid::new_v4(),
            name: " ".to_owned(),
            bio: None,
            image_url: None,
            mediums: Vec::new(),
        };
        assert!(matches!(
            row_to_user(row),
            Err(UserPersistenceError::Query { .. })
        ));
    }
}
