//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`ContactsQuery`, `ContactsCommand`) are what inbound
//! adapters call. The driven port (`ContactRepository`) is what the domain
//! needs from storage; its errors are typed so adapters map failures into
//! predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod contacts_command;
mod contacts_query;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{
    ContactRepository, ContactRepositoryError, InMemoryContactRepository,
};
pub use contacts_command::{CONTACT_DELETED_MESSAGE, ContactsCommand, DeleteContactOutcome};
pub use contacts_query::ContactsQuery;
