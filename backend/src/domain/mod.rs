//! Domain primitives, ports, and the contact store service.
//!
//! Purpose: hold the contact model and the CRUD use cases independently of
//! HTTP and of the storage format. Inbound adapters call the driving ports in
//! [`ports`]; outbound adapters implement [`ports::ContactRepository`].
//!
//! Public surface:
//! - `Contact`: stored record, kept as loaded.
//! - `ContactId`, `PersonName`, `EmailAddress`: validated request values.
//! - `NewContact`, `ContactPatch`: create and update payloads.
//! - `ContactService`: List/GetById/Create/Update/Delete over a repository.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod contact_service;
pub mod contacts;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact_service::{CONTACT_NOT_FOUND_MESSAGE, ContactService};
pub use self::contacts::{
    Contact, ContactId, ContactPatch, ContactValidationError, EmailAddress, NewContact,
    PersonName, remove_and_renumber, shift_ids_after_delete,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
