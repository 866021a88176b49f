//! Contact store backend: a JSON-file-backed CRUD service over HTTP.
//!
//! Layout follows ports and adapters: [`domain`] holds the model, the service,
//! and the ports; [`inbound`] exposes them over actix-web; [`outbound`]
//! persists the collection to disk.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
