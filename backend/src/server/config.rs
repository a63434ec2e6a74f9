//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use artfolio::inbound::http::session_config::BuildMode;
use artfolio::outbound::persistence::DbPool;
use artfolio::settings::{CloudinarySettings, GithubSettings};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) client_url: String,
    pub(crate) status_revision: String,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) github: Option<GithubSettings>,
    pub(crate) cloudinary: Option<CloudinarySettings>,
    pub(crate) build_mode: BuildMode,
    pub(crate) allow_fixture_login: bool,
}

impl ServerConfig {
    /// Construct a configuration with in-memory storage, the fixture
    /// identity provider and uploads disabled.
    ///
    /// Strictness follows the compilation profile, so release builds reject
    /// the fixture provider until [`Self::with_fixture_login`] allows it.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
        client_url: impl Into<String>,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            client_url: client_url.into(),
            status_revision: "ok".to_owned(),
            db_pool: None,
            github: None,
            cloudinary: None,
            build_mode: BuildMode::from_debug_assertions(),
            allow_fixture_login: false,
        }
    }

    /// Attach a database connection pool for the Diesel repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_status_revision(mut self, revision: impl Into<String>) -> Self {
        self.status_revision = revision.into();
        self
    }

    /// Sign in through GitHub instead of the fixture provider.
    #[must_use]
    pub fn with_github(mut self, github: Option<GithubSettings>) -> Self {
        self.github = github;
        self
    }

    #[must_use]
    pub fn with_cloudinary(mut self, cloudinary: Option<CloudinarySettings>) -> Self {
        self.cloudinary = cloudinary;
        self
    }

    #[must_use]
    pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    /// Permit the fixture identity provider regardless of build mode.
    #[must_use]
    pub fn with_fixture_login(mut self, allow: bool) -> Self {
        self.allow_fixture_login = allow;
        self
    }
}
