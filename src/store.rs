//! SQLite pool construction. Every pooled connection enforces foreign keys and waits on busy locks.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Connection options for `database_url`: create the file if missing, `foreign_keys = ON`,
/// and wait up to `busy_timeout` for a locked database.
pub fn connect_options(database_url: &str, busy_timeout: Duration) -> Result<SqliteConnectOptions, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(busy_timeout);
    Ok(options)
}

/// Open a bounded pool. Connections are handed back on drop, including on error paths.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let options = connect_options(&settings.database_url, settings.busy_timeout)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.busy_timeout + Duration::from_secs(1))
        .connect_with(options)
        .await?;
    tracing::info!(
        database_url = %settings.database_url,
        max_connections = settings.max_connections,
        "connected to store"
    );
    Ok(pool)
}
