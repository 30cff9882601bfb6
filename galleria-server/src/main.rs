//! # Galleria Server
//!
//! Artwork gallery backend.
//!
//! ## Overview
//!
//! Galleria Server exposes the gallery's data-access layer over HTTP:
//!
//! - **Browsing**: list, free-text search, and tag filtering over the
//!   artwork catalog
//! - **Engagement**: atomic view/like counter bumps via store procedures
//! - **Administration**: create, edit, and delete artwork records plus a
//!   statistics dashboard
//!
//! ## Architecture
//!
//! The server is built on Axum and uses PostgreSQL for persistent storage.
//! All store access goes through the `ArtworkRepository` port in
//! `galleria-core`; handlers read through the catalog's invalidated list
//! cache and never talk to the database directly.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galleria_core::{ArtworkCatalog, PostgresArtworkRepository, database};
use galleria_server::{AppState, create_app, infra::config::ConfigLoader};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "galleria-server")]
#[command(about = "Artwork gallery server with search, upload, and admin APIs")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to a galleria.toml config file
    #[arg(long, env = "GALLERIA_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap resolves env-backed arguments.
    let env_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_loaded {
        info!("loaded .env file");
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let pool = database::connect_pool(
        &config.database.url,
        config.database.max_connections,
    )
    .await
    .context("failed to connect to the artwork store")?;

    galleria_core::MIGRATOR
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    let repository = Arc::new(PostgresArtworkRepository::new(pool));
    let catalog = Arc::new(ArtworkCatalog::new(repository));
    let config = Arc::new(config);
    let state = AppState::new(catalog, Arc::clone(&config));

    let app = create_app(state);

    info!(
        "Starting Galleria Server on {}:{}",
        config.server.host, config.server.port
    );
    let listener = tokio::net::TcpListener::bind((
        config.server.host.as_str(),
        config.server.port,
    ))
    .await
    .context("failed to bind server address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
