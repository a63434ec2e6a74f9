//! Port for signing direct image uploads.

use crate::domain::{Error, UploadSignature};

/// Produces signed upload parameters for the image host.
#[cfg_attr(test, mockall::automock)]
pub trait UploadSigner: Send + Sync {
    /// Sign a fresh set of upload parameters.
    ///
    /// Returns `ServiceUnavailable` when the signer has no credentials.
    fn sign(&self) -> Result<UploadSignature, Error>;
}

/// Signer used when no image host is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledUploadSigner;

impl UploadSigner for DisabledUploadSigner {
    fn sign(&self) -> Result<UploadSignature, Error> {
        Err(Error::service_unavailable("image uploads are not configured"))
    }
}
