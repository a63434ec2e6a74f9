//! Builders selecting the adapters behind each HTTP state port.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};
use zeroize::Zeroizing;

use artfolio::domain::ports::{
    DisabledUploadSigner, FixtureIdentityProvider, IdentityProvider, UploadSigner,
    UserRepository, WorkOfArtRepository,
};
use artfolio::domain::{UserProfileService, WorkOfArtService};
use artfolio::inbound::http::session_config::BuildMode;
use artfolio::inbound::http::state::{HttpState, HttpStatePorts};
use artfolio::outbound::cloudinary::{CloudinaryCredentials, CloudinarySigner};
use artfolio::outbound::github::{GithubIdentityProvider, GithubOAuthConfig};
use artfolio::outbound::memory::{InMemoryUserRepository, InMemoryWorkOfArtRepository};
use artfolio::outbound::persistence::{DieselUserRepository, DieselWorkOfArtRepository};

use super::ServerConfig;

const GITHUB_TIMEOUT: Duration = Duration::from_secs(10);
const FIXTURE_CALLBACK_PATH: &str = "/api/auth/callback";

/// Wire the domain services over `users` and `works`, split across their
/// query and command ports.
fn service_ports<U, W>(
    users: U,
    works: W,
    clock: Arc<dyn Clock>,
    identity: Arc<dyn IdentityProvider>,
    uploads: Arc<dyn UploadSigner>,
) -> HttpStatePorts
where
    U: UserRepository + 'static,
    W: WorkOfArtRepository + 'static,
{
    let profile_service = Arc::new(UserProfileService::new(Arc::new(users)));
    let work_service = Arc::new(WorkOfArtService::new(Arc::new(works), clock));
    HttpStatePorts {
        profiles: profile_service.clone(),
        profile_commands: profile_service,
        works: work_service.clone(),
        work_commands: work_service,
        identity,
        uploads,
    }
}

fn build_identity_provider(config: &ServerConfig) -> std::io::Result<Arc<dyn IdentityProvider>> {
    let Some(github) = &config.github else {
        if config.build_mode == BuildMode::Release && !config.allow_fixture_login {
            return Err(std::io::Error::other(
                "GitHub OAuth is not configured; set ARTFOLIO_GITHUB_CLIENT_ID and \
                 ARTFOLIO_GITHUB_CLIENT_SECRET, or ARTFOLIO_ALLOW_FIXTURE_LOGIN=true",
            ));
        }
        warn!("GitHub OAuth not configured; using fixture identity provider");
        return Ok(Arc::new(FixtureIdentityProvider::new(FIXTURE_CALLBACK_PATH)));
    };
    let oauth = GithubOAuthConfig::new(
        github.client_id.clone(),
        github.client_secret.clone(),
        github.redirect_url.clone(),
    )
    .map_err(|e| std::io::Error::other(format!("invalid GitHub endpoint: {e}")))?;
    let provider = GithubIdentityProvider::new(oauth, GITHUB_TIMEOUT)
        .map_err(|e| std::io::Error::other(format!("failed to build GitHub client: {e}")))?;
    Ok(Arc::new(provider))
}

fn build_upload_signer(config: &ServerConfig, clock: Arc<dyn Clock>) -> Arc<dyn UploadSigner> {
    match &config.cloudinary {
        Some(cloudinary) => {
            info!(algorithm = %cloudinary.signature_algorithm, "upload signatures enabled");
            Arc::new(
                CloudinarySigner::new(
                    CloudinaryCredentials {
                        cloud_name: cloudinary.cloud_name.clone(),
                        api_key: cloudinary.api_key.clone(),
                        api_secret: Zeroizing::new(cloudinary.api_secret.clone()),
                        upload_preset: cloudinary.upload_preset.clone(),
                    },
                    clock,
                )
                .with_algorithm(cloudinary.signature_algorithm),
            )
        }
        None => {
            warn!("Cloudinary not configured; upload signatures disabled");
            Arc::new(DisabledUploadSigner)
        }
    }
}

/// Build HTTP state from configuration.
///
/// Uses the Diesel repositories when a pool is configured and the in-memory
/// repositories otherwise.
///
/// # Errors
/// Returns [`std::io::Error`] when the GitHub client cannot be constructed, or
/// when a release build has no GitHub credentials and no fixture opt-in.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let identity = build_identity_provider(config)?;
    let uploads = build_upload_signer(config, clock.clone());

    let ports = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            service_ports(
                DieselUserRepository::new(pool.clone()),
                DieselWorkOfArtRepository::new(pool.clone()),
                clock,
                identity,
                uploads,
            )
        }
        None => {
            warn!("no database configured; data lives in memory until shutdown");
            service_ports(
                InMemoryUserRepository::new(),
                InMemoryWorkOfArtRepository::new(),
                clock,
                identity,
                uploads,
            )
        }
    };

    Ok(web::Data::new(HttpState::new(
        ports,
        config.client_url.clone(),
        config.status_revision.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use artfolio::outbound::cloudinary::SignatureAlgorithm;
    use artfolio::settings::{CloudinarySettings, GithubSettings};
    use rstest::rstest;

    fn config() -> ServerConfig {
        ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            "127.0.0.1:0".parse().expect("socket addr"),
            "http://localhost:3000/",
        )
        .with_build_mode(BuildMode::Debug)
    }

    fn github() -> GithubSettings {
        GithubSettings {
            client_id: "client".into(),
            client_secret: "secret".into(),
            redirect_url: None,
        }
    }

    #[test]
    fn unconfigured_integrations_fall_back() {
        let state = build_http_state(&config()).expect("state builds");

        assert_eq!(state.client_url, "http://localhost:3000");
        assert_eq!(state.status_revision, "ok");
        assert!(state.uploads.sign().is_err());
        let url = state
            .identity
            .authorization_url("csrf")
            .expect("fixture url");
        assert!(url.starts_with(FIXTURE_CALLBACK_PATH));
    }

    #[test]
    fn cloudinary_settings_enable_signing() {
        let config = config().with_cloudinary(Some(CloudinarySettings {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            api_secret: "secret".into(),
            upload_preset: "artfolio".into(),
            signature_algorithm: SignatureAlgorithm::Sha256,
        }));

        let state = build_http_state(&config).expect("state builds");

        let signature = state.uploads.sign().expect("signature");
        assert_eq!(signature.cloud_name, "demo");
        assert_eq!(signature.signature.len(), 64);
    }

    #[test]
    fn release_build_refuses_fixture_login_by_default() {
        let config = config().with_build_mode(BuildMode::Release);

        let err = build_http_state(&config)
            .err()
            .expect("fixture login refused");

        assert!(err.to_string().contains("ARTFOLIO_ALLOW_FIXTURE_LOGIN"));
    }

    #[rstest]
    #[case::debug(BuildMode::Debug, false)]
    #[case::release_opt_in(BuildMode::Release, true)]
    fn fixture_login_is_permitted(#[case] mode: BuildMode, #[case] opt_in: bool) {
        let config = config().with_build_mode(mode).with_fixture_login(opt_in);

        let state = build_http_state(&config).expect("state builds");

        let url = state
            .identity
            .authorization_url("csrf")
            .expect("fixture url");
        assert!(url.starts_with(FIXTURE_CALLBACK_PATH));
    }

    #[test]
    fn release_build_accepts_github_credentials() {
        let config = config()
            .with_build_mode(BuildMode::Release)
            .with_github(Some(github()));

        let state = build_http_state(&config).expect("state builds");

        let url = state
            .identity
            .authorization_url("csrf")
            .expect("authorize url");
        assert!(url.starts_with("https://github.com/login/oauth/authorize"));
        assert!(url.contains("client_id=client"));
    }
}
