//! Signed parameters for direct uploads to the image host.

/// Signature and public parameters a client needs to upload an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSignature {
    /// Hex digest over the signed parameters.
    pub signature: String,
    /// Unix seconds covered by the signature.
    pub timestamp: i64,
    pub api_key: String,
    pub cloud_name: String,
    pub upload_preset: String,
}
