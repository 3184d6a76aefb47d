//! Raasi HTTP Server Binary
//!
//! Serves `POST /api/astro` and the client bundle.
//!
//! # Usage
//!
//! ```bash
//! PORT=5000 cargo run --bin raasi-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `STATIC_DIR`: Client bundle directory (default: public)
//! - `RAASI_CONFIG`: Optional TOML config file (default: ./raasi.toml if present)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use raasi_backend::config::ServerConfig;
use raasi_backend::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Raasi HTTP Server");

    let config = ServerConfig::load()?;
    let addr = config.socket_addr();
    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} not found; only the API will respond",
            config.static_dir.display()
        );
    }

    let app = create_router(AppState::new(config));

    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
