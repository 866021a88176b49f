//! Port for persisting the contact collection.
//!
//! The collection is stored as one document: adapters load it whole and save
//! it whole. There is no partial or incremental update.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::Contact;

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// The document is missing, unreadable, or not a valid contact array.
        Read { message: String } =>
            "contact store read failed: {message}",
        /// The document could not be written.
        Write { message: String } =>
            "contact store write failed: {message}",
    }
}

/// Storage for the ordered contact collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Load the whole collection in persisted order.
    async fn load(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Replace the persisted collection with `contacts`.
    async fn save(&self, contacts: &[Contact]) -> Result<(), ContactRepositoryError>;
}

/// Volatile repository holding the collection in memory.
///
/// Used by tests and local tooling in place of the file adapter.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create a repository pre-populated with `contacts`.
    #[must_use]
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
        }
    }

    /// Copy of the currently stored collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn load(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        self.contacts
            .lock()
            .map(|contacts| contacts.clone())
            .map_err(|_| ContactRepositoryError::read("in-memory store lock poisoned"))
    }

    async fn save(&self, contacts: &[Contact]) -> Result<(), ContactRepositoryError> {
        let mut stored = self
            .contacts
            .lock()
            .map_err(|_| ContactRepositoryError::write("in-memory store lock poisoned"))?;
        *stored = contacts.to_vec();
        Ok(())
    }
}
