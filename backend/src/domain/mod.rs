//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! adapters, plus the services implementing the driving ports. Keep types
//! transport agnostic and document invariants on each type.
//!
//! Public surface:
//! - Error, ErrorCode: error payload and stable identifiers.
//! - Medium: closed set of artistic techniques.
//! - User, UserId, UserName: artist profiles keyed by login name.
//! - WorkOfArt and friends: published artworks and their submissions.
//! - UserProfileService, WorkOfArtService: use-case implementations.

pub mod error;
pub mod medium;
pub mod ports;
pub mod trace_id;
pub mod upload;
pub mod user;
mod user_profile_service;
pub mod work_of_art;
mod work_of_art_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::medium::{Medium, ParseMediumError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::upload::UploadSignature;
pub use self::user::{ProfileUpdate, User, UserId, UserName, UserValidationError};
pub use self::user_profile_service::UserProfileService;
pub use self::work_of_art::{
    Material, MaterialSubmission, WorkOfArt, WorkOfArtContent, WorkOfArtId, WorkOfArtSubmission,
    WorkOfArtSummary, WorkOfArtValidationError,
};
pub use self::work_of_art_service::WorkOfArtService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use artfolio::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
