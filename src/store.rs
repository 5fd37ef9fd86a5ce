//! Database bootstrap: open the SQLite file and create the `characters` table.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::sql;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open a pool on `config.database_url`, creating the database file if it does not exist.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %config.database_url, "database opened");
    Ok(pool)
}

/// Create the characters table and its name index if absent. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in sql::create_table() {
        tracing::debug!(sql = %ddl, "ddl");
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}

/// Connect and make sure the schema exists.
pub async fn init(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let pool = connect(config).await?;
    ensure_tables(&pool).await?;
    Ok(pool)
}
