//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactsCommand>,
    pub contacts_query: Arc<dyn ContactsQuery>,
}

impl HttpState {
    /// Construct state from the command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use contacts_backend::domain::ContactService;
    /// use contacts_backend::domain::ports::InMemoryContactRepository;
    /// use contacts_backend::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(ContactService::new(Arc::new(
    ///     InMemoryContactRepository::default(),
    /// )));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.contacts_query.clone();
    /// ```
    pub fn new(contacts: Arc<dyn ContactsCommand>, contacts_query: Arc<dyn ContactsQuery>) -> Self {
        Self {
            contacts,
            contacts_query,
        }
    }

    /// Construct state where one service implements both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ContactsCommand + ContactsQuery + 'static,
    {
        Self::new(service.clone(), service)
    }
}
