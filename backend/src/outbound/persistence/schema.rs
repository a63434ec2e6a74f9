//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Artist profiles.
    ///
    /// `name` carries a UNIQUE constraint; `mediums` holds canonical labels.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        bio -> Nullable<Text>,
        image_url -> Nullable<Text>,
        mediums -> Array<Text>,
        created_at -> Timestamptz,
        /// Maintained by trigger.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Published works of art with embedded materials.
    works_of_art (id) {
        id -> Uuid,
        user_id -> Uuid,
        /// Owner login captured at creation.
        user_name -> Varchar,
        challenge_id -> Nullable<Text>,
        title -> Text,
        description -> Nullable<Text>,
        image_url -> Text,
        medium -> Varchar,
        /// JSON array of material documents.
        materials -> Jsonb,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(works_of_art -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(users, works_of_art);
