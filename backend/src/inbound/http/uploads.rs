//! Image upload signature endpoint.
//!
//! ```text
//! GET /api/cloudinary/signature
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, UploadSignature};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Parameters a browser needs to upload straight to the image host.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignatureResponse {
    pub signature: String,
    /// Unix seconds covered by the signature.
    pub timestamp: i64,
    pub api_key: String,
    pub cloud_name: String,
    pub upload_preset: String,
}

impl From<UploadSignature> for SignatureResponse {
    fn from(value: UploadSignature) -> Self {
        Self {
            signature: value.signature,
            timestamp: value.timestamp,
            api_key: value.api_key,
            cloud_name: value.cloud_name,
            upload_preset: value.upload_preset,
        }
    }
}

/// Sign a direct upload for the signed-in user.
#[utoipa::path(
    get,
    path = "/api/cloudinary/signature",
    responses(
        (status = 200, description = "Signed upload parameters", body = SignatureResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Uploads not configured", body = Error)
    ),
    tags = ["uploads"],
    operation_id = "uploadSignature"
)]
#[get("/cloudinary/signature")]
pub async fn upload_signature(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SignatureResponse>> {
    session.require_login()?;
    let signature = state.uploads.sign()?;
    Ok(web::Json(signature.into()))
}
