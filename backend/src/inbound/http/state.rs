//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on domain
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    IdentityProvider, UploadSigner, UserProfileCommand, UserProfileQuery, WorkOfArtCommand,
    WorkOfArtQuery,
};

/// Port implementations backing the HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub profiles: Arc<dyn UserProfileQuery>,
    pub profile_commands: Arc<dyn UserProfileCommand>,
    pub works: Arc<dyn WorkOfArtQuery>,
    pub work_commands: Arc<dyn WorkOfArtCommand>,
    pub identity: Arc<dyn IdentityProvider>,
    pub uploads: Arc<dyn UploadSigner>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub profiles: Arc<dyn UserProfileQuery>,
    pub profile_commands: Arc<dyn UserProfileCommand>,
    pub works: Arc<dyn WorkOfArtQuery>,
    pub work_commands: Arc<dyn WorkOfArtCommand>,
    pub identity: Arc<dyn IdentityProvider>,
    pub uploads: Arc<dyn UploadSigner>,
    /// Frontend origin that OAuth redirects land on.
    pub client_url: String,
    /// Text served by the status endpoint.
    pub status_revision: String,
}

impl HttpState {
    /// Build state from ports, the frontend origin and the deployed revision.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use artfolio::domain::ports::{DisabledUploadSigner, FixtureIdentityProvider};
    /// use artfolio::domain::{UserProfileService, WorkOfArtService};
    /// use artfolio::inbound::http::state::{HttpState, HttpStatePorts};
    /// use artfolio::outbound::memory::{InMemoryUserRepository, InMemoryWorkOfArtRepository};
    ///
    /// let profiles = Arc::new(UserProfileService::new(Arc::new(InMemoryUserRepository::new())));
    /// let works = Arc::new(WorkOfArtService::new(
    ///     Arc::new(InMemoryWorkOfArtRepository::new()),
    ///     Arc::new(mockable::DefaultClock),
    /// ));
    /// let state = HttpState::new(
    ///     HttpStatePorts {
    ///         profiles: profiles.clone(),
    ///         profile_commands: profiles,
    ///         works: works.clone(),
    ///         work_commands: works,
    ///         identity: Arc::new(FixtureIdentityProvider::default()),
    ///         uploads: Arc::new(DisabledUploadSigner),
    ///     },
    ///     "http://localhost:3000",
    ///     "ok",
    /// );
    /// assert_eq!(state.client_url, "http://localhost:3000");
    /// ```
    pub fn new(
        ports: HttpStatePorts,
        client_url: impl Into<String>,
        status_revision: impl Into<String>,
    ) -> Self {
        let HttpStatePorts {
            profiles,
            profile_commands,
            works,
            work_commands,
            identity,
            uploads,
        } = ports;
        Self {
            profiles,
            profile_commands,
            works,
            work_commands,
            identity,
            uploads,
            client_url: client_url.into().trim_end_matches('/').to_owned(),
            status_revision: status_revision.into(),
        }
    }
}
