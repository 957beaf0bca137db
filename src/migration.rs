//! Store schema: six tables, created with `IF NOT EXISTS` so startup can run this every time.
//! Order follows foreign-key dependencies (referenced tables first).

use crate::error::AppError;
use sqlx::SqlitePool;

const TABLES: &[(&str, &str)] = &[
    (
        "Customer",
        r#"
        CREATE TABLE IF NOT EXISTS Customer (
            CustomerID INTEGER PRIMARY KEY AUTOINCREMENT,
            FirstName TEXT NOT NULL,
            LastName TEXT NOT NULL,
            MiddleName TEXT NOT NULL UNIQUE,
            Telephone TEXT NOT NULL UNIQUE,
            Email TEXT NOT NULL UNIQUE,
            Address TEXT
        )
        "#,
    ),
    (
        "Seller",
        r#"
        CREATE TABLE IF NOT EXISTS Seller (
            SellerID INTEGER PRIMARY KEY AUTOINCREMENT,
            FullName TEXT NOT NULL,
            Phone TEXT UNIQUE,
            Position TEXT
        )
        "#,
    ),
    (
        "Configuration",
        r#"
        CREATE TABLE IF NOT EXISTS Configuration (
            ConfigurationID INTEGER PRIMARY KEY AUTOINCREMENT,
            Processor TEXT NOT NULL,
            RAM TEXT NOT NULL,
            Storage TEXT NOT NULL,
            GPU TEXT,
            OS TEXT
        )
        "#,
    ),
    (
        "Computer",
        r#"
        CREATE TABLE IF NOT EXISTS Computer (
            ComputerID INTEGER PRIMARY KEY AUTOINCREMENT,
            Model TEXT NOT NULL,
            Price REAL NOT NULL,
            ConfigurationID INTEGER NOT NULL,
            Warranty INTEGER DEFAULT 12,
            FOREIGN KEY (ConfigurationID) REFERENCES Configuration(ConfigurationID)
        )
        "#,
    ),
    (
        "OrderTable",
        r#"
        CREATE TABLE IF NOT EXISTS OrderTable (
            OrderID INTEGER PRIMARY KEY AUTOINCREMENT,
            OrderDate TEXT NOT NULL,
            CustomerID INTEGER NOT NULL,
            SellerID INTEGER NOT NULL,
            TotalAmount REAL NOT NULL DEFAULT 0,
            FOREIGN KEY (CustomerID) REFERENCES Customer(CustomerID),
            FOREIGN KEY (SellerID) REFERENCES Seller(SellerID)
        )
        "#,
    ),
    (
        "OrderDetail",
        r#"
        CREATE TABLE IF NOT EXISTS OrderDetail (
            DetailID INTEGER PRIMARY KEY AUTOINCREMENT,
            OrderID INTEGER NOT NULL,
            ComputerID INTEGER NOT NULL,
            Quantity INTEGER NOT NULL CHECK (Quantity > 0),
            UnitPrice REAL NOT NULL,
            FOREIGN KEY (OrderID) REFERENCES OrderTable(OrderID),
            FOREIGN KEY (ComputerID) REFERENCES Computer(ComputerID)
        )
        "#,
    ),
];

/// Create every table that does not exist yet. Safe to call on each startup.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(tables = TABLES.len(), "schema ready");
    Ok(())
}

/// Names of the tables managed by [`apply_migrations`], in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}
