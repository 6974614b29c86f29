mod address;
mod cli;
mod config;
mod constants;
mod handlers;
mod pairing;
mod state;

use crate::address::{AddressResolver, FixedAddress, InteractiveSelector};
use crate::cli::CliArgs;
use crate::config::{Config, ConfigStore};
use crate::handlers::webui::StaticAssets;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use clipboard_bridge::memory::MemoryClipboard;
use clipboard_bridge::{ClipboardBackend, ClipboardBridge, SystemBrowser, SystemClipboard};
use state::AppState;
use std::sync::Arc;
use storage::FilesystemStore;
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> Result<()> {
    // Filter out actix-server worker start/stop messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info")
                    .add_directive("actix_server::worker=warn".parse().unwrap())
                    .add_directive("actix_server::accept=warn".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config_path = match args.config.clone() {
        Some(path) => path,
        None => ConfigStore::default_path()?,
    };
    let config = ConfigStore::load(&config_path)
        .with_context(|| format!("Failed to load config {:?}", config_path))?;
    info!(
        "Loaded config {:?} ({} keys)",
        config_path,
        config.entries().len()
    );
    info!("Listening port: {}", config.port());

    let store = prepare_store(&config).await?;

    // Blocks on the console until an address is chosen; must finish before binding
    let address = resolve_address(&config)?;
    info!(
        "Advertised address: {} - scan the code below with the app",
        address
    );
    pairing::display(&config.pairing_payload(&address))
        .context("Failed to render pairing code")?;

    let backend: Arc<dyn ClipboardBackend> = if args.headless {
        info!("Headless mode: clipboard is kept in memory");
        Arc::new(MemoryClipboard::default())
    } else {
        Arc::new(SystemClipboard::spawn().context("Failed to start clipboard thread")?)
    };
    let clipboard = ClipboardBridge::new(backend, Arc::new(SystemBrowser));

    let webui = StaticAssets::new(args.webui_dir);
    info!("Serving web UI from {:?}", webui.root());
    let state = web::Data::new(AppState::new(Arc::new(store), clipboard, webui));

    let bind_address = config.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(handlers::cors_headers())
            .app_data(state.clone())
            .app_data(handlers::multipart_config())
            .configure(handlers::routes)
    })
    .bind(&bind_address)
    .map_err(|e| {
        error!("Failed to bind to {}: {}", bind_address, e);
        e
    })
    .with_context(|| format!("Failed to bind to {}", bind_address))?;

    info!("Server started on http://{}", bind_address);

    // Runs until the process is terminated
    server.run().await?;
    Ok(())
}

/// Create the storage folder on first run
async fn prepare_store(config: &Config) -> Result<FilesystemStore> {
    let store = FilesystemStore::new(config.folder());
    if config.folder().is_empty() {
        warn!("No storage folder configured; files resolve against the working directory");
        return Ok(store);
    }

    if store
        .ensure_root()
        .await
        .context("Failed to create storage folder")?
    {
        info!("Storage folder created: {:?}", store.root());
    } else {
        info!("Storage folder: {:?}", store.root());
    }
    Ok(store)
}

fn resolve_address(config: &Config) -> Result<String> {
    match config.ip() {
        Some(ip) => Ok(FixedAddress(ip.to_string()).resolve(&[])?),
        None => {
            let candidates = address::enumerate();
            let stdin = std::io::stdin();
            let mut selector = InteractiveSelector::new(stdin.lock(), std::io::stdout());
            Ok(selector.resolve(&candidates)?)
        }
    }
}
