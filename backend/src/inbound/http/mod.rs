//! HTTP inbound adapter exposing the REST API.

use actix_web::web;

pub mod auth;
pub mod error;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
pub mod status;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod uploads;
pub mod users;
mod validation;
pub mod works_of_art;

pub use error::ApiResult;

/// Register every `/api` handler on a scope or app.
///
/// Paths are relative, so callers mount this under `web::scope("/api")`
/// wrapped in the session middleware.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::callback)
        .service(auth::me)
        .service(auth::logout)
        .service(status::status)
        .service(users::get_user)
        .service(users::update_user)
        .service(works_of_art::list_works_of_art)
        .service(works_of_art::get_work_of_art)
        .service(works_of_art::create_work_of_art)
        .service(works_of_art::update_work_of_art)
        .service(works_of_art::delete_work_of_art)
        .service(uploads::upload_signature);
}
