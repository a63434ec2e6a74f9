//! Port for the external OAuth2 identity provider.
//!
//! The HTTP adapter drives the authorization-code flow through this port:
//! it redirects the browser to [`IdentityProvider::authorization_url`] and
//! later trades the returned code for the caller's login name.

use async_trait::async_trait;

use crate::domain::{Error, UserName};

/// Authorization-code identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Build the provider URL the browser should visit, embedding `state`.
    fn authorization_url(&self, state: &str) -> Result<String, Error>;

    /// Exchange an authorization code for the authenticated login name.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` when the provider rejects the code.
    /// - `ServiceUnavailable` when the provider cannot be reached.
    async fn exchange_code(&self, code: &str) -> Result<UserName, Error>;
}

/// In-process provider for development and tests.
///
/// The authorization URL points straight back at `callback_url`, and any
/// non-blank code is accepted as the login name.
#[derive(Debug, Clone)]
pub struct FixtureIdentityProvider {
    callback_url: String,
}

impl FixtureIdentityProvider {
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
        }
    }
}

impl Default for FixtureIdentityProvider {
    fn default() -> Self {
        Self::new("/api/auth/callback")
    }
}

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    fn authorization_url(&self, state: &str) -> Result<String, Error> {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("state", state)
            .finish();
        Ok(format!("{}?{query}", self.callback_url))
    }

    async fn exchange_code(&self, code: &str) -> Result<UserName, Error> {
        UserName::new(code).map_err(|_| Error::unauthorized("authorization code rejected"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[test]
    fn fixture_url_carries_encoded_state() {
        let provider = FixtureIdentityProvider::default();
        let url = provider.authorization_url("a b&c").expect("url");
        assert_eq!(url, "/api/auth/callback?state=a+b%26c");
    }

    #[rstest]
    #[case("octocat", true)]
    #[case("  ", false)]
    #[tokio::test]
    async fn fixture_accepts_non_blank_codes(#[case] code: &str, #[case] accepted: bool) {
        let provider = FixtureIdentityProvider::default();
        match (accepted, provider.exchange_code(code).await) {
            (true, Ok(name)) => assert_eq!(name.as_ref(), code),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(name)) => panic!("expected rejection, got login {name}"),
        }
    }
}
