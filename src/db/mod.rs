// src/db/mod.rs

use std::path::Path;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

mod reports;
pub use reports::ReportQueries;

/// Open the reporting database read-only. The file must already exist.
pub async fn connect_readonly(path: &Path, max_connections: u32) -> anyhow::Result<SqlitePool> {
    if !path.exists() {
        anyhow::bail!("database not found: {}", path.display());
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open {} read-only", path.display()))?;

    tracing::info!(path = %path.display(), "connected to SQLite (read-only)");
    Ok(pool)
}
