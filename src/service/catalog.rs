//! Hardware configurations and the computer models built on them.

use super::{begin_write, exists};
use crate::error::AppError;
use crate::models::{ComputerCreate, ComputerListing, ConfigurationCreate, ConfigurationRow};
use sqlx::SqlitePool;

const INSERT_CONFIGURATION: &str =
    "INSERT INTO Configuration (Processor, RAM, Storage, GPU, OS) VALUES (?, ?, ?, ?, ?)";

const LIST_CONFIGURATIONS: &str = r#"
    SELECT ConfigurationID AS configuration_id,
           Processor AS processor,
           RAM AS ram,
           Storage AS storage,
           GPU AS gpu,
           OS AS os
    FROM Configuration
    ORDER BY ConfigurationID
"#;

const CONFIGURATION_EXISTS: &str = "SELECT 1 FROM Configuration WHERE ConfigurationID = ?";

const INSERT_COMPUTER: &str =
    "INSERT INTO Computer (Model, Price, ConfigurationID, Warranty) VALUES (?, ?, ?, ?)";

const LIST_COMPUTERS: &str = r#"
    SELECT comp.ComputerID AS computer_id,
           comp.Model AS model,
           comp.Price AS price,
           comp.Warranty AS warranty,
           cfg.Processor AS processor,
           cfg.RAM AS ram,
           cfg.Storage AS storage,
           cfg.GPU AS gpu,
           cfg.OS AS os
    FROM Computer comp
    JOIN Configuration cfg ON comp.ConfigurationID = cfg.ConfigurationID
    ORDER BY comp.ComputerID
"#;

pub struct ConfigurationService;

impl ConfigurationService {
    pub async fn create(pool: &SqlitePool, cfg: &ConfigurationCreate) -> Result<i64, AppError> {
        tracing::debug!(sql = %INSERT_CONFIGURATION, "query");
        let id = sqlx::query(INSERT_CONFIGURATION)
            .bind(&cfg.processor)
            .bind(&cfg.ram)
            .bind(&cfg.storage)
            .bind(&cfg.gpu)
            .bind(&cfg.os)
            .execute(pool)
            .await
            .map_err(|e| AppError::storage(e, "configuration"))?
            .last_insert_rowid();
        tracing::info!(configuration_id = id, "configuration created");
        Ok(id)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<ConfigurationRow>, AppError> {
        tracing::debug!(sql = %LIST_CONFIGURATIONS, "query");
        let rows = sqlx::query_as::<_, ConfigurationRow>(LIST_CONFIGURATIONS)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}

pub struct ComputerService;

impl ComputerService {
    /// Insert a computer after checking its configuration exists.
    pub async fn create(pool: &SqlitePool, c: &ComputerCreate) -> Result<i64, AppError> {
        let mut tx = begin_write(pool).await?;
        if !exists(&mut *tx, CONFIGURATION_EXISTS, c.configuration_id).await? {
            return Err(AppError::NotFound(format!("configuration {}", c.configuration_id)));
        }
        tracing::debug!(sql = %INSERT_COMPUTER, "query (tx)");
        let id = sqlx::query(INSERT_COMPUTER)
            .bind(&c.model)
            .bind(c.price)
            .bind(c.configuration_id)
            .bind(c.warranty)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(e, "computer"))?
            .last_insert_rowid();
        tx.commit().await?;
        tracing::info!(computer_id = id, model = %c.model, "computer added");
        Ok(id)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<ComputerListing>, AppError> {
        tracing::debug!(sql = %LIST_COMPUTERS, "query");
        let rows = sqlx::query_as::<_, ComputerListing>(LIST_COMPUTERS)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
