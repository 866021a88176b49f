//! Backend entry-point: loads settings, opens the contact store, and serves
//! the REST endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contacts_backend::inbound::http::health::HealthState;
use contacts_backend::outbound::persistence::JsonFileContactRepository;
use contacts_backend::settings::ContactsSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ContactsSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let repository = JsonFileContactRepository::open(settings.data_file()).map_err(|e| {
        std::io::Error::other(format!(
            "failed to open contact store {}: {e}",
            settings.data_file().display()
        ))
    })?;
    if settings.create_missing_store {
        repository
            .ensure_exists()
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), Arc::new(repository));
    info!(
        bind_addr = %config.bind_addr(),
        store = %config.store_path().display(),
        "starting contact store server"
    );
    let server = create_server(health_state, config)?;
    server.await
}
