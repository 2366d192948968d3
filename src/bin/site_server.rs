// Site Server Binary Entry Point
//
// Purpose: Serve the portfolio page with Axum
// Usage: cargo run --bin site_server

use portfolio_site::{create_router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    // Configuration from environment variables
    // Unset paths fall back to the built-in content and motion defaults
    let content_path = std::env::var("CONTENT_PATH").ok().map(PathBuf::from);
    let config_path = std::env::var("SITE_CONFIG").ok().map(PathBuf::from);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_PATH: {:?}", content_path);
    tracing::info!("  SITE_CONFIG: {:?}", config_path);
    tracing::info!("  PORT: {}", port);

    let state = AppState::new(content_path.as_deref(), config_path.as_deref())?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
