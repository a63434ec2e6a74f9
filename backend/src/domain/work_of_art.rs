//! Work of art data model and submission validation.
//!
//! Submissions arrive with free-form medium labels. [`WorkOfArtContent`]
//! resolves them against [`Medium`] and rejects blank required fields before
//! anything is stored.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{Error, Medium, User, UserId, UserName};

/// Stable work of art identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkOfArtId(Uuid);

impl WorkOfArtId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Borrow the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WorkOfArtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkOfArtId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Tool or supply used to make a work of art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Display name; never blank.
    pub name: String,
    /// Manufacturer code such as a pigment number.
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Product line within the brand.
    #[serde(default)]
    pub line: Option<String>,
    /// Free-form category, serialized as `type`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Resolved independently of the work's own medium.
    #[serde(default)]
    pub medium: Option<Medium>,
}

/// Published work of art.
///
/// ## Invariants
/// - `title` and `image_url` are non-blank.
/// - `user_id`, `user_name` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOfArt {
    pub id: WorkOfArtId,
    /// Owner's id.
    pub user_id: UserId,
    /// Owner's login captured at creation.
    pub user_name: UserName,
    /// Opaque reference to a community challenge; trimmed and non-blank.
    pub challenge_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub medium: Medium,
    /// Supplies in the order the artist listed them.
    pub materials: Vec<Material>,
    /// Set once from the service clock.
    pub created_at: DateTime<Utc>,
}

impl WorkOfArt {
    /// Build a new work authored by `author`.
    pub fn new(
        id: WorkOfArtId,
        author: &User,
        content: WorkOfArtContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        let WorkOfArtContent {
            challenge_id,
            title,
            description,
            image_url,
            medium,
            materials,
        } = content;
        Self {
            id,
            user_id: *author.id(),
            user_name: author.name().clone(),
            challenge_id,
            title,
            description,
            image_url,
            medium,
            materials,
            created_at,
        }
    }

    /// Replace the editable fields, keeping identity, ownership and creation time.
    pub fn revise(self, content: WorkOfArtContent) -> Self {
        let WorkOfArtContent {
            challenge_id,
            title,
            description,
            image_url,
            medium,
            materials,
        } = content;
        Self {
            challenge_id,
            title,
            description,
            image_url,
            medium,
            materials,
            ..self
        }
    }

    /// Whether `login` names the owner of this work.
    pub fn is_owned_by(&self, login: &UserName) -> bool {
        &self.user_name == login
    }
}

/// Listing projection of a work of art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOfArtSummary {
    /// Same id as the full record.
    pub id: WorkOfArtId,
    pub user_id: UserId,
    pub user_name: UserName,
    pub title: String,
    pub image_url: String,
    pub medium: Medium,
    pub created_at: DateTime<Utc>,
}

impl From<WorkOfArt> for WorkOfArtSummary {
    fn from(value: WorkOfArt) -> Self {
        let WorkOfArt {
            id,
            user_id,
            user_name,
            title,
            image_url,
            medium,
            created_at,
            ..
        } = value;
        Self {
            id,
            user_id,
            user_name,
            title,
            image_url,
            medium,
            created_at,
        }
    }
}

/// Unvalidated material as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialSubmission {
    /// Required; validation rejects blank names.
    pub name: String,
    pub identifier: Option<String>,
    pub brand: Option<String>,
    pub line: Option<String>,
    pub kind: Option<String>,
    /// Raw label; `None` leaves the material without a medium.
    pub medium: Option<String>,
}

/// Unvalidated create or update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOfArtSubmission {
    /// Blank input is stored as absent.
    pub challenge_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    /// Raw label resolved against [`Medium`].
    pub medium: String,
    pub materials: Vec<MaterialSubmission>,
}

/// Validation failures for a [`WorkOfArtSubmission`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkOfArtValidationError {
    /// Title was blank after trimming.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Image URL was blank after trimming.
    #[error("imageUrl must not be empty")]
    EmptyImageUrl,
    /// The work's medium label is not recognized.
    #[error("medium is unavailable: {value}")]
    UnknownMedium { value: String },
    /// Material at `index` had a blank name.
    #[error("material {index} must have a name")]
    EmptyMaterialName { index: usize },
    /// Material at `index` carried an unrecognized medium label.
    #[error("material {index} medium is unavailable: {value}")]
    UnknownMaterialMedium { index: usize, value: String },
}

impl WorkOfArtValidationError {
    fn field(&self) -> String {
        match self {
            Self::EmptyTitle => "title".to_owned(),
            Self::EmptyImageUrl => "imageUrl".to_owned(),
            Self::UnknownMedium { .. } => "medium".to_owned(),
            Self::EmptyMaterialName { index } => format!("materials[{index}].name"),
            Self::UnknownMaterialMedium { index, .. } => format!("materials[{index}].medium"),
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::EmptyImageUrl | Self::EmptyMaterialName { .. } => {
                "empty_field"
            }
            Self::UnknownMedium { .. } | Self::UnknownMaterialMedium { .. } => "unknown_medium",
        }
    }
}

impl From<WorkOfArtValidationError> for Error {
    fn from(value: WorkOfArtValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

/// Validated editable content of a work of art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOfArtContent {
    pub challenge_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub medium: Medium,
    pub materials: Vec<Material>,
}

impl TryFrom<WorkOfArtSubmission> for WorkOfArtContent {
    type Error = WorkOfArtValidationError;

    fn try_from(value: WorkOfArtSubmission) -> Result<Self, Self::Error> {
        let WorkOfArtSubmission {
            challenge_id,
            title,
            description,
            image_url,
            medium,
            materials,
        } = value;

        if title.trim().is_empty() {
            return Err(WorkOfArtValidationError::EmptyTitle);
        }
        if image_url.trim().is_empty() {
            return Err(WorkOfArtValidationError::EmptyImageUrl);
        }
        let medium = medium
            .parse::<Medium>()
            .map_err(|_| WorkOfArtValidationError::UnknownMedium { value: medium })?;
        let materials = materials
            .into_iter()
            .enumerate()
            .map(|(index, material)| resolve_material(index, material))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            challenge_id: challenge_id
                .map(|id| id.trim().to_owned())
                .filter(|id| !id.is_empty()),
            title,
            description,
            image_url,
            medium,
            materials,
        })
    }
}

fn resolve_material(
    index: usize,
    material: MaterialSubmission,
) -> Result<Material, WorkOfArtValidationError> {
    let MaterialSubmission {
        name,
        identifier,
        brand,
        line,
        kind,
        medium,
    } = material;
    if name.trim().is_empty() {
        return Err(WorkOfArtValidationError::EmptyMaterialName { index });
    }
    let medium = match medium {
        Some(label) => Some(
            label
                .parse::<Medium>()
                .map_err(|_| WorkOfArtValidationError::UnknownMaterialMedium {
                    index,
                    value: label,
                })?,
        ),
        None => None,
    };
    Ok(Material {
        name,
        identifier,
        brand,
        line,
        kind,
        medium,
    })
}

#[cfg(test)]
mod tests;
