//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers deal with the signed-in login name and
//! the pending OAuth `state` rather than raw keys.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserName};

pub(crate) const LOGIN_KEY: &str = "login";
pub(crate) const OAUTH_STATE_KEY: &str = "oauth_state";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record the signed-in login name.
    pub fn persist_login(&self, login: &UserName) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(LOGIN_KEY, login.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The signed-in login name, if any.
    ///
    /// A tampered or blank value reads as signed out.
    pub fn login(&self) -> Result<Option<UserName>, Error> {
        let raw = self
            .0
            .get::<String>(LOGIN_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|value| match UserName::new(value) {
            Ok(name) => Some(name),
            Err(error) => {
                warn!(%error, "invalid login in session cookie");
                None
            }
        }))
    }

    /// Require a signed-in login or return `401 Unauthorized`.
    pub fn require_login(&self) -> Result<UserName, Error> {
        self.login()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Remember the CSRF `state` sent to the identity provider.
    pub fn store_oauth_state(&self, state: &str) -> Result<(), Error> {
        self.0
            .insert(OAUTH_STATE_KEY, state)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Remove and return the pending OAuth `state`.
    pub fn take_oauth_state(&self) -> Option<String> {
        self.0.remove_as::<String>(OAUTH_STATE_KEY).and_then(Result::ok)
    }

    /// Drop every session entry and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
