//! Work of art HTTP handlers.
//!
//! ```text
//! GET    /api/woa/{id}
//! GET    /api/woa?userId=...  |  /api/woa?mediums=oil&mediums=ink
//! POST   /api/woa
//! PUT    /api/woa/{id}
//! DELETE /api/woa/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, Material, MaterialSubmission, UserId, WorkOfArt, WorkOfArtId, WorkOfArtSubmission,
    WorkOfArtSummary,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{medium_filter, parse_path_id, query_values};

const RESOURCE: &str = "work of art";

/// Material used for a work of art.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDto {
    #[serde(default)]
    pub name: String,
    pub identifier: Option<String>,
    pub brand: Option<String>,
    pub line: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Canonical medium label, or `null`.
    pub medium: Option<String>,
}

impl From<Material> for MaterialDto {
    fn from(value: Material) -> Self {
        Self {
            name: value.name,
            identifier: value.identifier,
            brand: value.brand,
            line: value.line,
            kind: value.kind,
            medium: value.medium.map(|m| m.as_str().to_owned()),
        }
    }
}

impl From<MaterialDto> for MaterialSubmission {
    fn from(value: MaterialDto) -> Self {
        Self {
            name: value.name,
            identifier: value.identifier,
            brand: value.brand,
            line: value.line,
            kind: value.kind,
            medium: value.medium,
        }
    }
}

/// Create or update payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkOfArtRequest {
    pub challenge_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    #[schema(example = "watercolors")]
    pub medium: String,
    #[serde(default)]
    pub materials: Vec<MaterialDto>,
}

impl From<WorkOfArtRequest> for WorkOfArtSubmission {
    fn from(value: WorkOfArtRequest) -> Self {
        Self {
            challenge_id: value.challenge_id,
            title: value.title,
            description: value.description,
            image_url: value.image_url,
            medium: value.medium,
            materials: value.materials.into_iter().map(Into::into).collect(),
        }
    }
}

/// Full representation of a work of art.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkOfArtResponse {
    pub id: String,
    /// Owner's user id.
    pub user: String,
    pub user_name: String,
    pub challenge_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub medium: String,
    pub materials: Vec<MaterialDto>,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl From<WorkOfArt> for WorkOfArtResponse {
    fn from(value: WorkOfArt) -> Self {
        Self {
            id: value.id.to_string(),
            user: value.user_id.to_string(),
            user_name: value.user_name.to_string(),
            challenge_id: value.challenge_id,
            title: value.title,
            description: value.description,
            image_url: value.image_url,
            medium: value.medium.as_str().to_owned(),
            materials: value.materials.into_iter().map(Into::into).collect(),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Listing projection of a work of art.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkOfArtShortResponse {
    pub id: String,
    /// Owner's user id.
    pub user: String,
    pub user_name: String,
    pub title: String,
    pub image_url: String,
    pub medium: String,
    pub created_at: String,
}

impl From<WorkOfArtSummary> for WorkOfArtShortResponse {
    fn from(value: WorkOfArtSummary) -> Self {
        Self {
            id: value.id.to_string(),
            user: value.user_id.to_string(),
            user_name: value.user_name.to_string(),
            title: value.title,
            image_url: value.image_url,
            medium: value.medium.as_str().to_owned(),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

fn short_list(summaries: Vec<WorkOfArtSummary>) -> Vec<WorkOfArtShortResponse> {
    summaries.into_iter().map(Into::into).collect()
}

/// Fetch a single work of art.
#[utoipa::path(
    get,
    path = "/api/woa/{id}",
    params(("id" = String, Path, description = "Work of art id")),
    responses(
        (status = 200, description = "Work of art", body = WorkOfArtResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["works of art"],
    operation_id = "getWorkOfArt"
)]
#[get("/woa/{id}")]
pub async fn get_work_of_art(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<WorkOfArtResponse>> {
    session.require_login()?;
    let id: WorkOfArtId = parse_path_id(&path, RESOURCE)?;
    let work = state
        .works
        .fetch(&id)
        .await?
        .ok_or_else(|| Error::not_found("work of art not found"))?;
    Ok(web::Json(work.into()))
}

/// List works of art, newest first.
///
/// `userId` restricts the listing to one author and takes precedence over
/// `mediums`. Unknown medium labels are ignored.
#[utoipa::path(
    get,
    path = "/api/woa",
    params(
        ("userId" = Option<String>, Query, description = "Author id"),
        ("mediums" = Option<Vec<String>>, Query, description = "Medium labels, repeated or comma separated")
    ),
    responses(
        (status = 200, description = "Works of art", body = [WorkOfArtShortResponse]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["works of art"],
    operation_id = "listWorksOfArt"
)]
#[get("/woa")]
pub async fn list_works_of_art(
    state: web::Data<HttpState>,
    session: SessionContext,
    request: HttpRequest,
) -> ApiResult<web::Json<Vec<WorkOfArtShortResponse>>> {
    session.require_login()?;
    let query = request.query_string();
    if let Some(raw) = query_values(query, "userId").into_iter().next() {
        let Ok(user_id) = raw.parse::<UserId>() else {
            return Ok(web::Json(Vec::new()));
        };
        let summaries = state.works.list_by_user(&user_id).await?;
        return Ok(web::Json(short_list(summaries)));
    }
    let summaries = state.works.list_all(&medium_filter(query)).await?;
    Ok(web::Json(short_list(summaries)))
}

/// Publish a work of art as the signed-in user.
#[utoipa::path(
    post,
    path = "/api/woa",
    request_body = WorkOfArtRequest,
    responses(
        (
            status = 201,
            description = "Created",
            headers(("Location" = String, description = "URL of the new work")),
            body = WorkOfArtResponse
        ),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["works of art"],
    operation_id = "createWorkOfArt"
)]
#[post("/woa")]
pub async fn create_work_of_art(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<WorkOfArtRequest>,
) -> ApiResult<HttpResponse> {
    let login = session.require_login()?;
    let author = state.profile_commands.find_or_create(&login).await?;
    let work = state
        .work_commands
        .create(payload.into_inner().into(), &author)
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/woa/{}", work.id)))
        .json(WorkOfArtResponse::from(work)))
}

/// Replace a work of art owned by the signed-in user.
#[utoipa::path(
    put,
    path = "/api/woa/{id}",
    params(("id" = String, Path, description = "Work of art id")),
    request_body = WorkOfArtRequest,
    responses(
        (status = 200, description = "Updated work of art", body = WorkOfArtResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not the owner", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["works of art"],
    operation_id = "updateWorkOfArt"
)]
#[put("/woa/{id}")]
pub async fn update_work_of_art(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<WorkOfArtRequest>,
) -> ApiResult<web::Json<WorkOfArtResponse>> {
    let login = session.require_login()?;
    let id: WorkOfArtId = parse_path_id(&path, RESOURCE)?;
    let work = state
        .work_commands
        .update(&id, payload.into_inner().into(), &login)
        .await?;
    Ok(web::Json(work.into()))
}

/// Delete a work of art owned by the signed-in user. Returns the deleted id.
#[utoipa::path(
    delete,
    path = "/api/woa/{id}",
    params(("id" = String, Path, description = "Work of art id")),
    responses(
        (status = 200, description = "Deleted id", body = String),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Not the owner", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["works of art"],
    operation_id = "deleteWorkOfArt"
)]
#[delete("/woa/{id}")]
pub async fn delete_work_of_art(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<String>> {
    let login = session.require_login()?;
    let id: WorkOfArtId = parse_path_id(&path, RESOURCE)?;
    let deleted = state.work_commands.delete(&id, &login).await?;
    Ok(web::Json(deleted.to_string()))
}

#[cfg(test)]
#[path = "works_of_art_tests.rs"]
mod tests;
