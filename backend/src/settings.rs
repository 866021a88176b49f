//! Server settings loaded via OrthoConfig.
//!
//! Values come from `CONTACTS_*` environment variables or matching CLI flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_FILE: &str = "./contacts.json";

/// Configuration values controlling the listener and the contact store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ContactsSettings {
    /// Address to bind.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Path of the JSON document holding the contact collection.
    pub data_file: Option<PathBuf>,
    /// Write an empty collection at startup when the document is missing.
    #[ortho_config(default = false)]
    pub create_missing_store: bool,
}

impl ContactsSettings {
    /// Socket address to bind, falling back to `0.0.0.0:5000`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Path of the contact document, falling back to `./contacts.json`.
    pub fn data_file(&self) -> &Path {
        self.data_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_FILE))
    }
}
