//! Data access per resource. Each call borrows a pooled connection (or a transaction) for its
//! statements and hands it back on return.

mod catalog;
mod orders;
mod parties;
mod validation;

pub use catalog::{ComputerService, ConfigurationService};
pub use orders::OrderService;
pub use parties::{CustomerService, SellerService};
pub use validation::{RequestValidator, Validate};

use crate::error::AppError;
use sqlx::{Executor, Sqlite, SqlitePool, Transaction};

/// Open a transaction that takes the write lock up front (`BEGIN IMMEDIATE`).
///
/// A deferred transaction that reads before writing cannot be upgraded once another writer has
/// committed, and SQLite fails it with `SQLITE_BUSY` without consulting the busy timeout. Taking
/// the lock at `BEGIN` makes concurrent writers queue on `busy_timeout` instead.
pub(crate) async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, AppError> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

/// Run a `SELECT 1 ... WHERE <pk> = ?` lookup and report whether a row came back.
pub(crate) async fn exists<'e, E>(executor: E, sql: &'static str, id: i64) -> Result<bool, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    tracing::debug!(sql = %sql, id, "exists");
    let row = sqlx::query_scalar::<_, i64>(sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}
