//! User profile HTTP handlers.
//!
//! ```text
//! GET /api/user?id=...   or   GET /api/user?name=...
//! PUT /api/user/{id}
//! ```

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Medium, ProfileUpdate, User, UserId, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{missing_field_error, parse_path_id};

/// Lookup parameters for `GET /api/user`. `id` wins when both are given.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserLookupQuery {
    /// User id (UUID).
    pub id: Option<String>,
    /// Login name.
    pub name: Option<String>,
}

/// Editable profile fields.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileRequest {
    pub bio: Option<String>,
    pub image_url: Option<String>,
    /// Medium labels, matched case-insensitively. Unknown labels are dropped.
    #[serde(default)]
    pub mediums: Vec<String>,
}

/// Public profile of a user.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub mediums: Vec<String>,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            bio: user.bio().map(str::to_owned),
            image_url: user.image_url().map(str::to_owned),
            mediums: user
                .mediums()
                .iter()
                .map(|medium| medium.as_str().to_owned())
                .collect(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fetch a user profile by id or login name.
#[utoipa::path(
    get,
    path = "/api/user",
    params(UserLookupQuery),
    responses(
        (status = 200, description = "User profile", body = UserProfileResponse),
        (status = 400, description = "Neither id nor name given", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user")]
pub async fn get_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<UserLookupQuery>,
) -> ApiResult<web::Json<UserProfileResponse>> {
    session.require_login()?;
    let user = match (non_blank(query.id.as_deref()), non_blank(query.name.as_deref())) {
        (Some(id), _) => {
            let id: UserId = parse_path_id(id, "user")?;
            state.profiles.fetch_by_id(&id).await?
        }
        (None, Some(name)) => {
            let name = UserName::new(name).map_err(|_| Error::not_found("user not found"))?;
            state.profiles.fetch_by_name(&name).await?
        }
        (None, None) => return Err(missing_field_error("id")),
    };
    Ok(web::Json(user.into()))
}

/// Replace the signed-in user's bio, image and mediums.
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UserProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfileResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not the profile owner", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UserProfileRequest>,
) -> ApiResult<web::Json<UserProfileResponse>> {
    let login = session.require_login()?;
    let id: UserId = parse_path_id(&path, "user")?;
    let UserProfileRequest {
        bio,
        image_url,
        mediums,
    } = payload.into_inner();
    let update = ProfileUpdate {
        bio,
        image_url,
        mediums: Medium::normalize_all(&mediums),
    };
    let user = state
        .profile_commands
        .update_profile(&id, update, &login)
        .await?;
    Ok(web::Json(user.into()))
}
