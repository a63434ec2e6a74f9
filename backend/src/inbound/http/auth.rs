//! OAuth sign-in handlers.
//!
//! ```text
//! GET  /api/auth/login     redirect to the identity provider
//! GET  /api/auth/callback  trade the code for a session
//! GET  /api/auth/me        signed-in login as plain text, or empty
//! POST /api/auth/logout    clear the session
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::IntoParams;
use uuid::Uuid;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Parameters the identity provider appends to the callback URL.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

/// Start the OAuth flow.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    responses(
        (status = 302, description = "Redirect to the identity provider"),
        (status = 503, description = "Identity provider unavailable", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[get("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let csrf = Uuid::new_v4().simple().to_string();
    session.store_oauth_state(&csrf)?;
    let url = state.identity.authorization_url(&csrf)?;
    Ok(redirect(url))
}

/// Complete the OAuth flow and sign the user in.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    params(CallbackQuery),
    responses(
        (
            status = 302,
            description = "Signed in; redirect to the feed",
            headers(("Set-Cookie" = String, description = "Session cookie"))
        ),
        (status = 400, description = "State mismatch", body = Error),
        (status = 401, description = "Code rejected", body = Error),
        (status = 503, description = "Identity provider unavailable", body = Error)
    ),
    tags = ["auth"],
    operation_id = "oauthCallback",
    security([])
)]
#[get("/auth/callback")]
pub async fn callback(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<CallbackQuery>,
) -> ApiResult<HttpResponse> {
    let CallbackQuery { code, state: echoed } = query.into_inner();
    let expected = session.take_oauth_state();
    if expected.is_none() || expected != echoed {
        debug!("oauth callback state mismatch");
        return Err(Error::invalid_request("OAuth state mismatch"));
    }
    let code = code
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| Error::unauthorized("authorization was not granted"))?;

    let granted = state.identity.exchange_code(&code).await?;
    let user = state.profile_commands.find_or_create(&granted).await?;
    session.persist_login(user.name())?;
    info!(login = %user.name(), "signed in");
    Ok(redirect(format!("{}/feed", state.client_url)))
}

/// Return the signed-in login name, or an empty body.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Login name or empty", body = String, content_type = "text/plain")),
    tags = ["auth"],
    operation_id = "currentLogin",
    security([])
)]
#[get("/auth/me")]
pub async fn me(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<HttpResponse> {
    let body = match session.login()? {
        Some(signed_in) => state
            .profile_commands
            .find_or_create(&signed_in)
            .await?
            .name()
            .to_string(),
        None => String::new(),
    };
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body))
}

/// Sign out and return to the frontend.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 302, description = "Session cleared; redirect to the frontend")),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/auth/logout")]
pub async fn logout(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    session.purge();
    redirect(state.client_url.clone())
}
