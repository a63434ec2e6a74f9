//! User data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Medium;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyName => write!(f, "user name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Login name issued by the identity provider.
///
/// Names are unique across users and never change once a user exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`], trimming surrounding whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Editable part of a user's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub image_url: Option<String>,
    /// Mediums in preference order; duplicates are collapsed on apply.
    pub mediums: Vec<Medium>,
}

/// Application user.
///
/// ## Invariants
/// - `name` is non-blank and fixed at creation.
/// - `mediums` holds no duplicates and keeps the order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    bio: Option<String>,
    image_url: Option<String>,
    mediums: Vec<Medium>,
}

impl User {
    /// Build the record stored on a user's first login.
    ///
    /// Bio and image start as empty strings and no mediums are selected.
    ///
    /// # Examples
    /// ```
    /// use artfolio::domain::{User, UserId, UserName};
    ///
    /// let name = UserName::new("octocat").expect("valid name");
    /// let user = User::new(UserId::random(), name);
    /// assert_eq!(user.bio(), Some(""));
    /// assert!(user.mediums().is_empty());
    /// ```
    pub fn new(id: UserId, name: UserName) -> Self {
        Self {
            id,
            name,
            bio: Some(String::new()),
            image_url: Some(String::new()),
            mediums: Vec::new(),
        }
    }

    /// Rebuild a user from stored fields.
    pub fn restore(
        id: UserId,
        name: UserName,
        bio: Option<String>,
        image_url: Option<String>,
        mediums: Vec<Medium>,
    ) -> Self {
        Self {
            id,
            name,
            bio,
            image_url,
            mediums: dedupe(mediums),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Login name, unique across users.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn mediums(&self) -> &[Medium] {
        &self.mediums
    }

    /// Whether `login` names the owner of this record.
    pub fn is_owned_by(&self, login: &UserName) -> bool {
        &self.name == login
    }

    /// Overwrite the editable profile fields.
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            bio,
            image_url,
            mediums,
        } = update;
        self.bio = bio;
        self.image_url = image_url;
        self.mediums = dedupe(mediums);
    }
}

fn dedupe(mediums: Vec<Medium>) -> Vec<Medium> {
    let mut unique = Vec::with_capacity(mediums.len());
    for medium in mediums {
        if !unique.contains(&medium) {
            unique.push(medium);
        }
    }
    unique
}
