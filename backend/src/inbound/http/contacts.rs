//! Contact store HTTP handlers.
//!
//! ```text
//! GET    /contacts
//! GET    /contacts/{id}
//! POST   /contacts
//! PUT    /contacts/{id}
//! DELETE /contacts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::DeleteContactOutcome;
use crate::domain::{Contact, ContactPatch, Error, NewContact};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ContactSchema, DeleteContactOutcomeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    EMAIL, FIRST_NAME, ID, LAST_NAME, immutable_field_error, missing_field_error, parse_contact_id,
    parse_email, parse_name, parse_optional_email, parse_optional_name,
};

/// Request payload for creating a contact.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// Request payload for updating a contact; absent fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Ids are immutable; a request carrying one is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<u32>)]
    pub id: Option<serde_json::Value>,
}

fn parse_create_request(payload: CreateContactRequest) -> Result<NewContact, Error> {
    let first_name = payload
        .first_name
        .ok_or_else(|| missing_field_error(FIRST_NAME))?;
    let last_name = payload
        .last_name
        .ok_or_else(|| missing_field_error(LAST_NAME))?;
    let email = payload.email.ok_or_else(|| missing_field_error(EMAIL))?;

    Ok(NewContact {
        first_name: parse_name(first_name, FIRST_NAME)?,
        last_name: parse_name(last_name, LAST_NAME)?,
        email: parse_email(email, EMAIL)?,
    })
}

fn parse_update_request(payload: UpdateContactRequest) -> Result<ContactPatch, Error> {
    if payload.id.is_some() {
        return Err(immutable_field_error(ID));
    }

    Ok(ContactPatch {
        first_name: parse_optional_name(payload.first_name, FIRST_NAME)?,
        last_name: parse_optional_name(payload.last_name, LAST_NAME)?,
        email: parse_optional_email(payload.email, EMAIL)?,
    })
}

/// List every contact in persisted order.
#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "All contacts", body = [ContactSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Contact>>> {
    let contacts = state.contacts_query.list().await?;
    Ok(web::Json(contacts))
}

/// Fetch one contact by id.
#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(("id" = u32, Path, description = "Contact id", minimum = 1)),
    responses(
        (status = 200, description = "Contact", body = ContactSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Contact>> {
    let id = parse_contact_id(&path)?;
    let contact = state.contacts_query.get(id).await?;
    Ok(web::Json(contact))
}

/// Append a contact with the next id.
#[utoipa::path(
    post,
    path = "/contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Created contact", body = ContactSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<CreateContactRequest>,
) -> ApiResult<HttpResponse> {
    let new_contact = parse_create_request(payload.into_inner())?;
    let contact = state.contacts.create(new_contact).await?;
    Ok(HttpResponse::Created().json(contact))
}

/// Merge the supplied fields onto an existing contact.
#[utoipa::path(
    put,
    path = "/contacts/{id}",
    params(("id" = u32, Path, description = "Contact id", minimum = 1)),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Updated contact", body = ContactSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateContactRequest>,
) -> ApiResult<web::Json<Contact>> {
    let id = parse_contact_id(&path)?;
    let patch = parse_update_request(payload.into_inner())?;
    let contact = state.contacts.update(id, patch).await?;
    Ok(web::Json(contact))
}

/// Remove a contact and renumber the ones after it.
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    params(("id" = u32, Path, description = "Contact id", minimum = 1)),
    responses(
        (status = 200, description = "Contact deleted", body = DeleteContactOutcomeSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteContactOutcome>> {
    let id = parse_contact_id(&path)?;
    let outcome = state.contacts.delete(id).await?;
    Ok(web::Json(outcome))
}
