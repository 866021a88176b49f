//! Contact store service implementing the driving ports.
//!
//! Every operation loads the whole collection from the repository. Mutations
//! modify it in memory and save it back whole; a failed save discards the
//! mutation. Within one process, mutations are serialised so concurrent
//! creates cannot both observe the same collection length.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, ContactsCommand, ContactsQuery,
    DeleteContactOutcome,
};
use crate::domain::{
    Contact, ContactId, ContactPatch, Error, NewContact, remove_and_renumber,
};

/// Message returned when no contact carries the requested id.
pub const CONTACT_NOT_FOUND_MESSAGE: &str = "Contact not found";

/// Contact service backed by a [`ContactRepository`].
pub struct ContactService<R> {
    repository: Arc<R>,
    write_lock: Mutex<()>,
}

impl<R> ContactService<R> {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    fn map_repository_error(err: ContactRepositoryError) -> Error {
        match err {
            ContactRepositoryError::Read { message } => {
                error!(error = %message, "failed to load contacts");
                Error::internal("Failed to read data")
                    .with_details(json!({ "code": "storage_read_failed" }))
            }
            ContactRepositoryError::Write { message } => {
                error!(error = %message, "failed to save contacts");
                Error::internal("Failed to save data")
                    .with_details(json!({ "code": "storage_write_failed" }))
            }
        }
    }

    fn not_found(id: ContactId) -> Error {
        Error::not_found(CONTACT_NOT_FOUND_MESSAGE).with_details(json!({
            "id": id.get(),
            "code": "contact_not_found",
        }))
    }

    async fn load(&self) -> Result<Vec<Contact>, Error> {
        self.repository
            .load()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn persist(&self, contacts: &[Contact]) -> Result<(), Error> {
        self.repository
            .save(contacts)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list(&self) -> Result<Vec<Contact>, Error> {
        let contacts = self.load().await?;
        debug!(count = contacts.len(), "listed contacts");
        Ok(contacts)
    }

    async fn get(&self, id: ContactId) -> Result<Contact, Error> {
        self.load()
            .await?
            .into_iter()
            .find(|contact| contact.has_id(id))
            .ok_or_else(|| Self::not_found(id))
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn create(&self, contact: NewContact) -> Result<Contact, Error> {
        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load().await?;

        let id = ContactId::next_for_len(contacts.len())
            .map_err(|err| Error::internal(format!("cannot allocate contact id: {err}")))?;
        if contacts.iter().any(|existing| existing.has_id(id)) {
            warn!(contact_id = %id, "allocated id already present; stored ids are not dense");
        }

        let created = contact.into_contact(id);
        contacts.push(created.clone());
        self.persist(&contacts).await?;

        info!(contact_id = %id, "contact created");
        Ok(created)
    }

    async fn update(&self, id: ContactId, patch: ContactPatch) -> Result<Contact, Error> {
        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load().await?;

        let stored = contacts
            .iter_mut()
            .find(|contact| contact.has_id(id))
            .ok_or_else(|| Self::not_found(id))?;
        stored.apply(patch);
        let merged = stored.clone();
        self.persist(&contacts).await?;

        info!(contact_id = %id, "contact updated");
        Ok(merged)
    }

    async fn delete(&self, id: ContactId) -> Result<DeleteContactOutcome, Error> {
        let _guard = self.write_lock.lock().await;
        let contacts = self.load().await?;

        let remaining = remove_and_renumber(&contacts, id).ok_or_else(|| Self::not_found(id))?;
        self.persist(&remaining).await?;

        info!(
            contact_id = %id,
            remaining = remaining.len(),
            "contact deleted and ids renumbered"
        );
        Ok(DeleteContactOutcome::new(remaining))
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
