//! Transport-agnostic errors raised by the domain and its ports.
//!
//! The HTTP adapter maps [`ErrorCode`] to a status and serializes [`Error`]
//! as the response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::TraceId;

/// Failure category, serialized in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input, unknown medium, or a failed OAuth state check.
    InvalidRequest,
    /// Nobody is signed in, or the identity provider refused the code.
    Unauthorized,
    /// Signed in, but not the owner of the profile or work.
    Forbidden,
    NotFound,
    /// The database, GitHub or the image host could not be used.
    ServiceUnavailable,
    InternalError,
}

/// Error with a non-blank message.
///
/// Construction captures the [`TraceId`] of the current request, if any.
///
/// # Examples
/// ```
/// use artfolio::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "ErrorWire", into = "ErrorWire")]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "Something went wrong")]
    message: String,
    details: Option<Value>,
    trace_id: Option<String>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was blank.
    #[error("error message must not be empty")]
    EmptyMessage,
}

macro_rules! error_code_constructors {
    ($($name:ident => $code:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Shorthand for [`ErrorCode::", stringify!($code), "`].")]
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ErrorCode::$code, message)
            }
        )+
    };
}

impl Error {
    /// Build an error from a message known to be non-blank.
    ///
    /// # Panics
    /// Panics when `message` is blank; use [`Error::try_new`] for messages
    /// that come from outside the crate.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message).unwrap_or_else(|err| panic!("invalid error message: {err}"))
    }

    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured context such as the offending field.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach structured context.
    ///
    /// # Examples
    /// ```
    /// use artfolio::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "medium" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    error_code_constructors! {
        invalid_request => InvalidRequest,
        unauthorized => Unauthorized,
        forbidden => Forbidden,
        not_found => NotFound,
        service_unavailable => ServiceUnavailable,
        internal => InternalError,
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Serialized shape shared by responses and clients. Deserializing re-runs
/// message validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorWire {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl From<Error> for ErrorWire {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            details: value.details,
            trace_id: value.trace_id,
        }
    }
}

impl TryFrom<ErrorWire> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorWire) -> Result<Self, Self::Error> {
        Error::try_new(value.code, value.message).map(|error| Self {
            details: value.details,
            trace_id: value.trace_id,
            ..error
        })
    }
}

#[cfg(test)]
mod tests;
