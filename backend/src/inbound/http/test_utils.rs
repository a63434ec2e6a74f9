//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{HttpResponse, Resource, test, web};

use crate::domain::ports::{
    MockIdentityProvider, MockUploadSigner, MockUserProfileCommand, MockUserProfileQuery,
    MockWorkOfArtCommand, MockWorkOfArtQuery,
};
use crate::domain::{Error, UserName};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

pub(crate) const CLIENT_URL: &str = "http://localhost:3000";
const SIGN_IN_PATH: &str = "/__test/sign-in";

/// Session middleware with a fresh key, cookie name `session` and the
/// `Secure` flag off so plain-HTTP test requests keep the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Mocks for every port; unset expectations fail the test if called.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub profiles: MockUserProfileQuery,
    pub profile_commands: MockUserProfileCommand,
    pub works: MockWorkOfArtQuery,
    pub work_commands: MockWorkOfArtCommand,
    pub identity: MockIdentityProvider,
    pub uploads: MockUploadSigner,
}

impl MockPorts {
    pub(crate) fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            HttpStatePorts {
                profiles: Arc::new(self.profiles),
                profile_commands: Arc::new(self.profile_commands),
                works: Arc::new(self.works),
                work_commands: Arc::new(self.work_commands),
                identity: Arc::new(self.identity),
                uploads: Arc::new(self.uploads),
            },
            CLIENT_URL,
            "test-revision",
        ))
    }
}

/// Route that signs the caller in as `{login}` without an identity provider.
pub(crate) fn sign_in_resource() -> Resource {
    web::resource(format!("{SIGN_IN_PATH}/{{login}}")).route(web::get().to(
        |session: SessionContext, login: web::Path<String>| async move {
            let login = UserName::new(login.into_inner())
                .map_err(|err| Error::invalid_request(err.to_string()))?;
            session.persist_login(&login)?;
            Ok::<_, Error>(HttpResponse::Ok().finish())
        },
    ))
}

/// Request that signs the caller in as `login` via [`sign_in_resource`].
pub(crate) fn sign_in_request(login: &str) -> test::TestRequest {
    test::TestRequest::get().uri(&format!("{SIGN_IN_PATH}/{login}"))
}

/// The `session` cookie set on `response`.
pub(crate) fn session_cookie(response: &ServiceResponse) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("response sets a session cookie")
}
