//! Customers and sellers: the two parties an order references.

use crate::error::AppError;
use crate::models::{CustomerCreate, CustomerSummary, SellerCreate, SellerRow};
use sqlx::SqlitePool;

const INSERT_CUSTOMER: &str = r#"
    INSERT INTO Customer (FirstName, LastName, MiddleName, Telephone, Email, Address)
    VALUES (?, ?, ?, ?, ?, ?)
"#;

const LIST_CUSTOMERS: &str = r#"
    SELECT CustomerID AS customer_id,
           FirstName AS first_name,
           LastName AS last_name,
           Telephone AS telephone,
           Email AS email
    FROM Customer
    ORDER BY CustomerID
"#;

const INSERT_SELLER: &str = "INSERT INTO Seller (FullName, Phone, Position) VALUES (?, ?, ?)";

const LIST_SELLERS: &str = r#"
    SELECT SellerID AS seller_id,
           FullName AS full_name,
           Phone AS phone,
           Position AS position
    FROM Seller
    ORDER BY SellerID
"#;

pub struct CustomerService;

impl CustomerService {
    /// Insert a customer. Any unique collision (middle name, telephone, email) is a conflict.
    pub async fn create(pool: &SqlitePool, c: &CustomerCreate) -> Result<i64, AppError> {
        tracing::debug!(sql = %INSERT_CUSTOMER, "query");
        let id = sqlx::query(INSERT_CUSTOMER)
            .bind(&c.first_name)
            .bind(&c.last_name)
            .bind(&c.middle_name)
            .bind(&c.telephone)
            .bind(&c.email)
            .bind(&c.address)
            .execute(pool)
            .await
            .map_err(|e| AppError::storage(e, "customer"))?
            .last_insert_rowid();
        tracing::info!(customer_id = id, "customer created");
        Ok(id)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<CustomerSummary>, AppError> {
        tracing::debug!(sql = %LIST_CUSTOMERS, "query");
        let rows = sqlx::query_as::<_, CustomerSummary>(LIST_CUSTOMERS)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}

pub struct SellerService;

impl SellerService {
    pub async fn create(pool: &SqlitePool, s: &SellerCreate) -> Result<i64, AppError> {
        tracing::debug!(sql = %INSERT_SELLER, "query");
        let id = sqlx::query(INSERT_SELLER)
            .bind(&s.full_name)
            .bind(&s.phone)
            .bind(&s.position)
            .execute(pool)
            .await
            .map_err(|e| AppError::storage(e, "seller"))?
            .last_insert_rowid();
        tracing::info!(seller_id = id, "seller created");
        Ok(id)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<SellerRow>, AppError> {
        tracing::debug!(sql = %LIST_SELLERS, "query");
        let rows = sqlx::query_as::<_, SellerRow>(LIST_SELLERS)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
