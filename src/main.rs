// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tracket API Server
//!
//! Tracks padel/tennis/pickleball sessions and serves the derived
//! court summaries, favorites and equipment usage to the frontend.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracket::{config::Config, db::MemDb, services, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting Tracket API");

    // Initialize in-memory store
    let db = MemDb::new();

    // Optionally seed activity history from a CSV export
    if let Some(path) = &config.seed_csv_path {
        match services::seed_from_file(&db, path) {
            Ok(outcome) => tracing::info!(
                path = %path,
                imported = outcome.imported,
                total = outcome.total,
                "Seeded activities from CSV"
            ),
            Err(err) => tracing::warn!(path = %path, error = %err, "CSV seed failed"),
        }
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
    });

    // Build router
    let app = tracket::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tracket=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
