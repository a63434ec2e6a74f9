//! DTOs for decoding GitHub OAuth and REST responses.

use serde::Deserialize;

/// Token endpoint payload.
///
/// GitHub answers `200 OK` even for rejected codes, carrying `error` instead
/// of `access_token`.
#[derive(Debug, Deserialize)]
pub(super) struct AccessTokenResponseDto {
    #[serde(default)]
    pub(super) access_token: Option<String>,
    #[serde(default)]
    pub(super) error: Option<String>,
    #[serde(default)]
    pub(super) error_description: Option<String>,
}

/// Subset of `GET /user` the backend reads.
#[derive(Debug, Deserialize)]
pub(super) struct GithubUserDto {
    pub(super) login: String,
}

/// Outcome of interpreting a token endpoint payload.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum TokenOutcome {
    Granted(String),
    Rejected(String),
}

impl AccessTokenResponseDto {
    pub(super) fn into_outcome(self) -> TokenOutcome {
        match (self.access_token, self.error) {
            (Some(token), None) if !token.is_empty() => TokenOutcome::Granted(token),
            (_, Some(error)) => TokenOutcome::Rejected(match self.error_description {
                Some(description) => format!("{error}: {description}"),
                None => error,
            }),
            _ => TokenOutcome::Rejected("token response carried no access token".to_owned()),
        }
    }
}
