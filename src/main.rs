// src/main.rs

use plotify_api::{build_router, config::Config, db, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        database = %config.database_path.display(),
        static_dir = %config.static_dir.display(),
        max_connections = config.max_connections,
        "starting plotify-api"
    );

    // Read-only DB pool
    let pool = db::connect_readonly(&config.database_path, config.max_connections).await?;
    let state = AppState::new(pool);

    let app = build_router(state, Some(config.static_dir.as_path()));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("API listening on http://127.0.0.1:{}", config.port);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
