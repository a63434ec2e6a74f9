//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{users, works_of_art};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub mediums: Vec<String>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub bio: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub mediums: Vec<String>,
}

/// Changeset for the editable profile columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserProfileChangeset<'a> {
    pub bio: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub mediums: Vec<String>,
}

/// Row struct for reading from the works_of_art table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = works_of_art)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WorkOfArtRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub challenge_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub medium: String,
    pub materials: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new works of art.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = works_of_art)]
pub(crate) struct NewWorkOfArtRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: &'a str,
    pub challenge_id: Option<&'a str>,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image_url: &'a str,
    pub medium: &'a str,
    pub materials: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Changeset applied when an existing work is replaced.
///
/// Excludes identity, ownership and creation time.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = works_of_art)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct WorkOfArtChangeset<'a> {
    pub challenge_id: Option<&'a str>,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image_url: &'a str,
    pub medium: &'a str,
    pub materials: serde_json::Value,
}
