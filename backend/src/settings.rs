//! Application settings loaded via OrthoConfig.
//!
//! The server starts for local development with nothing configured: in-memory
//! storage, the fixture identity provider and disabled uploads. Release builds
//! refuse the fixture provider unless `ARTFOLIO_ALLOW_FIXTURE_LOGIN` is set.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::cloudinary::{SignatureAlgorithm, UnknownSignatureAlgorithm};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
const DEFAULT_STATUS_REVISION: &str = "ok";
const GITHUB_SHA_VAR: &str = "GITHUB_SHA";

/// Runtime configuration for the Artfolio backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ARTFOLIO")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Absent means in-memory storage.
    pub database_url: Option<String>,
    /// Base URL of the single-page frontend used for post-login redirects.
    pub client_url: Option<String>,
    pub github_client_id: Option<String>,
    pub github_client_secret: Option<String>,
    /// Optional `redirect_uri` sent to GitHub during authorization.
    pub github_redirect_url: Option<String>,
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_api_key: Option<String>,
    pub cloudinary_api_secret: Option<String>,
    pub cloudinary_upload_preset: Option<String>,
    /// `sha1` (default) or `sha256`, matching the account's console setting.
    pub cloudinary_signature_algorithm: Option<String>,
    /// Revision reported by `GET /api/status`.
    pub status_revision: Option<String>,
    /// Accept the fixture identity provider in release builds.
    #[ortho_config(default = false)]
    pub allow_fixture_login: bool,
}

/// GitHub OAuth credentials, present only when both halves are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: Option<String>,
}

/// Cloudinary credentials, present only when all four values are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinarySettings {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub upload_preset: String,
    pub signature_algorithm: SignatureAlgorithm,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

impl AppSettings {
    /// Return the bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when the configured value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        non_blank(&self.bind_addr)
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    pub fn database_url(&self) -> Option<String> {
        non_blank(&self.database_url)
    }

    /// Return the frontend base URL, falling back to `http://localhost:3000`.
    pub fn client_url(&self) -> String {
        non_blank(&self.client_url).unwrap_or_else(|| DEFAULT_CLIENT_URL.to_owned())
    }

    pub fn github(&self) -> Option<GithubSettings> {
        Some(GithubSettings {
            client_id: non_blank(&self.github_client_id)?,
            client_secret: non_blank(&self.github_client_secret)?,
            redirect_url: non_blank(&self.github_redirect_url),
        })
    }

    /// Return the Cloudinary account, or `None` unless all four credentials
    /// are set.
    ///
    /// # Errors
    /// Returns [`UnknownSignatureAlgorithm`] when the configured algorithm is
    /// neither `sha1` nor `sha256`.
    pub fn cloudinary(&self) -> Result<Option<CloudinarySettings>, UnknownSignatureAlgorithm> {
        let signature_algorithm = non_blank(&self.cloudinary_signature_algorithm)
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();
        let credentials = (
            non_blank(&self.cloudinary_cloud_name),
            non_blank(&self.cloudinary_api_key),
            non_blank(&self.cloudinary_api_secret),
            non_blank(&self.cloudinary_upload_preset),
        );
        let (Some(cloud_name), Some(api_key), Some(api_secret), Some(upload_preset)) = credentials
        else {
            return Ok(None);
        };
        Ok(Some(CloudinarySettings {
            cloud_name,
            api_key,
            api_secret,
            upload_preset,
            signature_algorithm,
        }))
    }

    /// Return the status revision.
    ///
    /// Falls back to `GITHUB_SHA` as exported by CI builds, then to `ok`.
    pub fn status_revision(&self) -> String {
        non_blank(&self.status_revision)
            .or_else(|| non_blank(&std::env::var(GITHUB_SHA_VAR).ok()))
            .unwrap_or_else(|| DEFAULT_STATUS_REVISION.to_owned())
    }
}
