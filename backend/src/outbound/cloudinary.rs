//! Cloudinary-compatible upload signer.
//!
//! Signs the parameters of an unsigned-widget upload so the browser can post
//! images straight to the image host without seeing the API secret.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use mockable::Clock;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::domain::ports::UploadSigner;
use crate::domain::{Error, UploadSignature};

const UPLOAD_SOURCE: &str = "uw";

/// Digest the image host expects on signed requests.
///
/// Accounts verify SHA-1 unless their signature algorithm was switched to
/// SHA-256 in the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// The image host's default.
    #[default]
    Sha1,
    /// Opt-in algorithm for accounts configured for it.
    Sha256,
}

/// Raised when a configured algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown signature algorithm '{0}'; expected sha1 or sha256")]
pub struct UnknownSignatureAlgorithm(pub String);

impl FromStr for SignatureAlgorithm {
    type Err = UnknownSignatureAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            _ => Err(UnknownSignatureAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        })
    }
}

/// Credentials for the image host account.
pub struct CloudinaryCredentials {
    /// Account name used in upload URLs.
    pub cloud_name: String,
    /// Public key sent alongside each signature.
    pub api_key: String,
    /// Secret appended to the signed string; never leaves the server.
    pub api_secret: Zeroizing<String>,
    /// Upload preset the widget posts with.
    pub upload_preset: String,
}

/// Signs upload parameters with the account secret.
pub struct CloudinarySigner {
    credentials: CloudinaryCredentials,
    algorithm: SignatureAlgorithm,
    clock: Arc<dyn Clock>,
}

impl CloudinarySigner {
    /// Signer using the default SHA-1 digest, timestamped by `clock`.
    pub fn new(credentials: CloudinaryCredentials, clock: Arc<dyn Clock>) -> Self {
        Self {
            credentials,
            algorithm: SignatureAlgorithm::default(),
            clock,
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    fn has_credentials(&self) -> bool {
        let c = &self.credentials;
        [
            c.cloud_name.as_str(),
            c.api_key.as_str(),
            c.api_secret.as_str(),
            c.upload_preset.as_str(),
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }
}

impl UploadSigner for CloudinarySigner {
    fn sign(&self) -> Result<UploadSignature, Error> {
        if !self.has_credentials() {
            return Err(Error::service_unavailable("image uploads are not configured"));
        }
        let timestamp = self.clock.utc().timestamp();
        let signature = sign_params(
            &[
                ("source", UPLOAD_SOURCE.to_owned()),
                ("timestamp", timestamp.to_string()),
                ("upload_preset", self.credentials.upload_preset.clone()),
            ],
            &self.credentials.api_secret,
            self.algorithm,
        );
        Ok(UploadSignature {
            signature,
            timestamp,
            api_key: self.credentials.api_key.clone(),
            cloud_name: self.credentials.cloud_name.clone(),
            upload_preset: self.credentials.upload_preset.clone(),
        })
    }
}

/// Hex digest over `k=v` pairs sorted by key, joined by `&`, then the secret.
fn sign_params(params: &[(&str, String)], secret: &str, algorithm: SignatureAlgorithm) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    match algorithm {
        SignatureAlgorithm::Sha1 => digest_hex::<Sha1>(&joined, secret),
        SignatureAlgorithm::Sha256 => digest_hex::<Sha256>(&joined, secret),
    }
}

fn digest_hex<D: Digest>(joined: &str, secret: &str) -> String {
    let mut hasher = D::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
