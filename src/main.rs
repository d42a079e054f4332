//! mxisd-directory: federated Matrix user directory search
//!
//! This is the main entry point for the application.

use anyhow::Result;
use mxisd_directory::{
    config,
    directory::{DirectoryManager, ProviderLoader},
    dns::ClientDnsOverwrite,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings_path = config::locate();
    let settings = config::init(config::load(settings_path.as_deref())?)?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.general.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting mxisd-directory v{}", mxisd_directory::VERSION);
    match &settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized (user agent: {})", client.user_agent());

    // Address rewrites
    let dns = ClientDnsOverwrite::new(&settings.dns.overwrite.homeserver.client)?;
    info!("Loaded {} DNS overwrite(s)", dns.len());

    // Load providers
    let providers = ProviderLoader::load(settings, &client);
    let directory = DirectoryManager::new(providers, Arc::new(dns), client);
    info!(
        "Directory search ready with {} provider(s)",
        directory.providers().len()
    );

    let state = AppState::new(settings.clone(), directory);
    let app = create_router(state);

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
