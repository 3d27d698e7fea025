#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use lumen_waitlist_api::{build_router, AppState, WaitlistStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn env_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = env_str("LUMEN_WAITLIST_ADDR", "0.0.0.0:8080");
    let db_path = PathBuf::from(env_str("LUMEN_WAITLIST_DB", "waitlist.sqlite"));

    let store = WaitlistStore::open(&db_path)?;
    let app = build_router(AppState {
        store: Arc::new(store),
    });

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, db = %db_path.display(), "waitlist api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("waitlist api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
