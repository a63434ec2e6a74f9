//! Reqwest-backed GitHub OAuth identity provider.
//!
//! Owns transport details only: building the authorize URL, exchanging the
//! code for a token and reading the login from the REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::dto::{AccessTokenResponseDto, GithubUserDto, TokenOutcome};
use crate::domain::ports::IdentityProvider;
use crate::domain::{Error, UserName};

const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const DEFAULT_API_URL: &str = "https://api.github.com/";
const DEFAULT_USER_AGENT: &str = "artfolio-backend/0.1";
const OAUTH_SCOPE: &str = "read:user";

/// OAuth application credentials and endpoints.
pub struct GithubOAuthConfig {
    pub client_id: String,
    pub client_secret: Zeroizing<String>,
    /// Callback registered with the OAuth app; omitted when `None`.
    pub redirect_url: Option<String>,
    pub authorize_url: Url,
    pub token_url: Url,
    pub api_url: Url,
}

impl GithubOAuthConfig {
    /// Credentials against the public github.com endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in endpoint fails to parse.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: Option<String>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client_id: client_id.into(),
            client_secret: Zeroizing::new(client_secret.into()),
            redirect_url,
            authorize_url: Url::parse(DEFAULT_AUTHORIZE_URL)?,
            token_url: Url::parse(DEFAULT_TOKEN_URL)?,
            api_url: Url::parse(DEFAULT_API_URL)?,
        })
    }
}

/// GitHub identity provider performing the authorization-code exchange.
pub struct GithubIdentityProvider {
    client: Client,
    config: GithubOAuthConfig,
}

impl GithubIdentityProvider {
    /// Build a provider whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: GithubOAuthConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, config })
    }

    async fn request_token(&self, code: &str) -> Result<String, Error> {
        let mut form = vec![
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
        ];
        if let Some(redirect) = self.config.redirect_url.as_deref() {
            form.push(("redirect_uri", redirect));
        }

        let response = self
            .client
            .post(self.config.token_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let decoded: AccessTokenResponseDto = serde_json::from_slice(&body)
            .map_err(|err| invalid_response(format!("token payload: {err}")))?;
        match decoded.into_outcome() {
            TokenOutcome::Granted(token) => Ok(token),
            TokenOutcome::Rejected(reason) => {
                debug!(reason = %reason, "github rejected authorization code");
                Err(Error::unauthorized("authorization code rejected"))
            }
        }
    }

    async fn fetch_login(&self, token: &str) -> Result<UserName, Error> {
        let url = self
            .config
            .api_url
            .join("user")
            .map_err(|err| Error::internal(format!("invalid GitHub API URL: {err}")))?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let user: GithubUserDto = serde_json::from_slice(&body)
            .map_err(|err| invalid_response(format!("user payload: {err}")))?;
        UserName::new(user.login).map_err(|err| invalid_response(err.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for GithubIdentityProvider {
    fn authorization_url(&self, state: &str) -> Result<String, Error> {
        Ok(build_authorization_url(&self.config, state).into())
    }

    async fn exchange_code(&self, code: &str) -> Result<UserName, Error> {
        if code.trim().is_empty() {
            return Err(Error::unauthorized("authorization code missing"));
        }
        let token = Zeroizing::new(self.request_token(code).await?);
        self.fetch_login(&token).await
    }
}

fn build_authorization_url(config: &GithubOAuthConfig, state: &str) -> Url {
    let mut url = config.authorize_url.clone();
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("client_id", &config.client_id)
            .append_pair("scope", OAUTH_SCOPE)
            .append_pair("state", state);
        if let Some(redirect) = config.redirect_url.as_deref() {
            query.append_pair("redirect_uri", redirect);
        }
    }
    url
}

fn invalid_response(detail: String) -> Error {
    warn!(detail = %detail, "github returned an unexpected payload");
    Error::service_unavailable("identity provider returned an invalid response")
}

fn map_transport_error(error: reqwest::Error) -> Error {
    warn!(error = %error, timeout = error.is_timeout(), "github request failed");
    Error::service_unavailable("identity provider unreachable")
}

fn map_status_error(status: StatusCode, body: &[u8]) -> Error {
    let preview = body_preview(body);
    debug!(status = status.as_u16(), body = %preview, "github returned an error status");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::unauthorized("identity provider rejected the credentials")
        }
        _ => Error::service_unavailable(format!(
            "identity provider returned status {}",
            status.as_u16()
        )),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network GitHub helpers.

    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn config(redirect: Option<&str>) -> GithubOAuthConfig {
        GithubOAuthConfig::new("client-123", "shh", redirect.map(str::to_owned))
            .expect("default endpoints parse")
    }

    #[test]
    fn authorization_url_carries_client_scope_and_state() {
        let url = build_authorization_url(&config(None), "csrf-token");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(url.as_str().starts_with(DEFAULT_AUTHORIZE_URL));
        assert!(pairs.contains(&("client_id".to_owned(), "client-123".to_owned())));
        assert!(pairs.contains(&("scope".to_owned(), OAUTH_SCOPE.to_owned())));
        assert!(pairs.contains(&("state".to_owned(), "csrf-token".to_owned())));
        assert!(pairs.iter().all(|(k, _)| k != "redirect_uri"));
    }

    #[test]
    fn authorization_url_includes_redirect_when_configured() {
        let url = build_authorization_url(
            &config(Some("https://artfolio.example/api/auth/callback")),
            "s",
        );
        assert!(url.query_pairs().any(|(k, v)| {
            k == "redirect_uri" && v == "https://artfolio.example/api/auth/callback"
        }));
    }

    #[rstest]
    #[case(r#"{"access_token":"gho_abc","token_type":"bearer"}"#, TokenOutcome::Granted("gho_abc".to_owned()))]
    #[case(
        r#"{"error":"bad_verification_code","error_description":"The code passed is incorrect"}"#,
        TokenOutcome::Rejected("bad_verification_code: The code passed is incorrect".to_owned())
    )]
    #[case(r#"{}"#, TokenOutcome::Rejected("token response carried no access token".to_owned()))]
    fn interprets_token_payloads(#[case] body: &str, #[case] expected: TokenOutcome) {
        let decoded: AccessTokenResponseDto = serde_json::from_str(body).expect("valid JSON");
        assert_eq!(decoded.into_outcome(), expected);
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized)]
    #[case(StatusCode::FORBIDDEN, ErrorCode::Unauthorized)]
    #[case(StatusCode::BAD_GATEWAY, ErrorCode::ServiceUnavailable)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::ServiceUnavailable)]
    fn maps_http_statuses(#[case] status: StatusCode, #[case] expected: ErrorCode) {
        assert_eq!(map_status_error(status, b"{}").code(), expected);
    }

    #[test]
    fn body_preview_truncates_long_payloads() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }
}
