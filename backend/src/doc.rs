//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the contact handlers and the health probes.
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ContactSchema`]
//!   and friends) that provide OpenAPI definitions without coupling domain
//!   types to the utoipa framework.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::contacts::{CreateContactRequest, UpdateContactRequest};
use crate::inbound::http::schemas::{
    ContactSchema, DeleteContactOutcomeSchema, ErrorCodeSchema, ErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts backend API",
        description = "CRUD interface over a JSON-file contact store, plus health probes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContactSchema,
        CreateContactRequest,
        UpdateContactRequest,
        DeleteContactOutcomeSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "contacts", description = "Contact store operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
