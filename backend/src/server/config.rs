//! Listening address and contact store handed to [`super::create_server`].

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use contacts_backend::outbound::persistence::JsonFileContactRepository;

/// Where to listen and which contact document to serve.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<JsonFileContactRepository>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: Arc<JsonFileContactRepository>) -> Self {
        Self {
            bind_addr,
            repository,
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Path of the JSON document every request reads and rewrites.
    #[must_use]
    pub fn store_path(&self) -> &Path {
        self.repository.path()
    }
}
