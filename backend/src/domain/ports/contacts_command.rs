//! Driving port for mutating contacts.
//!
//! Each command is a full read-modify-write of the persisted collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactId, ContactPatch, Error, NewContact};

/// Confirmation message returned after a deletion.
pub const CONTACT_DELETED_MESSAGE: &str = "Contact deleted successfully";

/// Result of deleting a contact: the renumbered collection as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteContactOutcome {
    /// Human-readable confirmation.
    pub message: String,
    /// Collection after removal and renumbering.
    pub updated_contacts: Vec<Contact>,
}

impl DeleteContactOutcome {
    /// Wrap a renumbered collection with the standard confirmation message.
    #[must_use]
    pub fn new(updated_contacts: Vec<Contact>) -> Self {
        Self {
            message: CONTACT_DELETED_MESSAGE.to_owned(),
            updated_contacts,
        }
    }
}

/// Write-side use cases for the contact collection.
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Append a contact with id `len + 1` and return it.
    async fn create(&self, contact: NewContact) -> Result<Contact, Error>;

    /// Merge `patch` onto the contact carrying `id` and return the result.
    async fn update(&self, id: ContactId, patch: ContactPatch) -> Result<Contact, Error>;

    /// Remove the contact carrying `id` and renumber the ones after it.
    async fn delete(&self, id: ContactId) -> Result<DeleteContactOutcome, Error>;
}
