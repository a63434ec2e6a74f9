//! Artfolio backend library: domain core, HTTP adapter and outbound adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[doc(hidden)]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
