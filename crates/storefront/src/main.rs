//! Plantify Storefront - single-page storefront demo.
//!
//! This binary serves the storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - Fixed product catalog provided at startup (JSON file or the
//!   built-in demo data)
//! - In-process cart store and navigation router; no database, no
//!   external services

#![cfg_attr(not(test), forbid(unsafe_code))]

use plantify_storefront::catalog::Catalog;
use plantify_storefront::config::StorefrontConfig;
use plantify_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "plantify_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Read the fixed catalog once at startup; there is no update
    // mechanism afterwards
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).expect("Failed to load catalog"),
        None => Catalog::demo(),
    };
    tracing::info!(products = catalog.len(), "catalog ready");

    // Build application state; the navigation router seeds once from the
    // configured initial location
    let state = AppState::new(config, catalog);
    let addr = state.config().socket_addr();
    let app = plantify_storefront::app(state);

    // Start server
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
