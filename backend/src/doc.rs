//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint from the inbound layer along with
//! the request and response DTOs, and registers the session cookie security
//! scheme. Swagger UI serves it at `/docs` in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::uploads::SignatureResponse;
use crate::inbound::http::users::{UserProfileRequest, UserProfileResponse};
use crate::inbound::http::works_of_art::{
    MaterialDto, WorkOfArtRequest, WorkOfArtResponse, WorkOfArtShortResponse,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by GET /api/auth/callback.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Artfolio backend API",
        description = "Profiles, works of art and upload signing for the Artfolio portfolio site."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::callback,
        crate::inbound::http::auth::me,
        crate::inbound::http::auth::logout,
        crate::inbound::http::status::status,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::works_of_art::list_works_of_art,
        crate::inbound::http::works_of_art::get_work_of_art,
        crate::inbound::http::works_of_art::create_work_of_art,
        crate::inbound::http::works_of_art::update_work_of_art,
        crate::inbound::http::works_of_art::delete_work_of_art,
        crate::inbound::http::uploads::upload_signature,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        UserProfileRequest,
        UserProfileResponse,
        MaterialDto,
        WorkOfArtRequest,
        WorkOfArtResponse,
        WorkOfArtShortResponse,
        SignatureResponse,
    )),
    tags(
        (name = "auth", description = "GitHub sign-in and session lifecycle"),
        (name = "users", description = "Artist profiles"),
        (name = "works of art", description = "Published artworks"),
        (name = "uploads", description = "Signed image uploads"),
        (name = "status", description = "Deployed revision"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/auth/callback")]
    #[case("/api/user")]
    #[case("/api/user/{id}")]
    #[case("/api/woa")]
    #[case("/api/woa/{id}")]
    #[case("/api/cloudinary/signature")]
    #[case("/api/status")]
    #[case("/health/ready")]
    fn document_lists_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("WorkOfArtResponse", "user")]
    #[case("WorkOfArtShortResponse", "user")]
    #[case("WorkOfArtResponse", "userName")]
    #[case("WorkOfArtResponse", "createdAt")]
    #[case("MaterialDto", "type")]
    #[case("UserProfileResponse", "mediums")]
    #[case("Error", "traceId")]
    fn schema_uses_wire_field_names(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let found = schemas.get(schema).expect("schema registered");
        assert_object_schema_has_field(found, field);
    }

    #[test]
    fn session_cookie_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
