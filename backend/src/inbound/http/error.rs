//! Rendering of domain errors as JSON responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Wire envelope: the error fields plus the time it was rendered.
#[derive(Serialize)]
struct ErrorBody {
    #[serde(flatten)]
    error: Error,
    /// Milliseconds since the Unix epoch.
    timestamp: i64,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ErrorBody {
    /// Render `error`, swapping internal failures for a generic message that
    /// keeps only the trace identifier.
    fn render(error: &Error) -> Self {
        let error = if error.code() == ErrorCode::InternalError {
            error!(message = %error.message(), trace_id = ?error.trace_id(), "internal error");
            let generic = Error::internal(INTERNAL_MESSAGE);
            match error.trace_id() {
                Some(id) => generic.with_trace_id(id),
                None => generic,
            }
        } else {
            error.clone()
        };
        Self {
            error,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody::render(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_MESSAGE)
    }
}
