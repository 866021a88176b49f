//! Driving port for reading contacts.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error};

/// Read-side use cases for the contact collection.
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Return every contact in persisted order.
    async fn list(&self) -> Result<Vec<Contact>, Error>;

    /// Return the contact carrying `id`, or a not-found error.
    async fn get(&self, id: ContactId) -> Result<Contact, Error>;
}
