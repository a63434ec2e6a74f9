//! Deployment status endpoint.

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::state::HttpState;

/// Report the deployed revision as plain text.
#[utoipa::path(
    get,
    path = "/api/status",
    responses((status = 200, description = "Deployed revision", body = String, content_type = "text/plain")),
    tags = ["status"],
    operation_id = "status",
    security([])
)]
#[get("/status")]
pub async fn status(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(state.status_revision.clone())
}
