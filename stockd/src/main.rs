use std::sync::Arc;

use stockd::{Config, http, pinger};
use stockd_core::StockCatalog;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,stockd=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let cfg = Config::from_env()?;
    let catalog = Arc::new(StockCatalog::builtin());
    info!(symbols = catalog.len(), "catalog loaded");

    // Held for the life of the process; dropping it would stop the pinger.
    let _ping = pinger::spawn(cfg.self_ping_url.clone(), cfg.self_ping_period);

    let app = http::router(catalog);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port)).await?;
    info!(addr = %listener.local_addr()?, "stockd listening");
    axum::serve(listener, app).await?;

    Ok(())
}
