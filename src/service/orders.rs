//! Orders and their line items. The order total is always rebuilt from the detail rows.

use super::{begin_write, exists};
use crate::error::AppError;
use crate::models::{OrderCreate, OrderHeader, OrderItemCreate, OrderItemView, OrderView};
use chrono::{Local, NaiveDate};
use sqlx::{SqliteConnection, SqlitePool};

const CUSTOMER_EXISTS: &str = "SELECT 1 FROM Customer WHERE CustomerID = ?";
const SELLER_EXISTS: &str = "SELECT 1 FROM Seller WHERE SellerID = ?";
const ORDER_EXISTS: &str = "SELECT 1 FROM OrderTable WHERE OrderID = ?";

const INSERT_ORDER: &str = "INSERT INTO OrderTable (OrderDate, CustomerID, SellerID) VALUES (?, ?, ?)";

const COMPUTER_PRICE: &str = "SELECT Price FROM Computer WHERE ComputerID = ?";

const INSERT_DETAIL: &str =
    "INSERT INTO OrderDetail (OrderID, ComputerID, Quantity, UnitPrice) VALUES (?, ?, ?, ?)";

const RECOMPUTE_TOTAL: &str = r#"
    UPDATE OrderTable
    SET TotalAmount = (
        SELECT COALESCE(SUM(Quantity * UnitPrice), 0)
        FROM OrderDetail
        WHERE OrderID = ?
    )
    WHERE OrderID = ?
"#;

const ORDER_HEADER: &str = r#"
    SELECT o.OrderID AS id,
           o.OrderDate AS date,
           o.TotalAmount AS total,
           c.FirstName || ' ' || c.LastName AS customer
    FROM OrderTable o
    JOIN Customer c ON o.CustomerID = c.CustomerID
    WHERE o.OrderID = ?
"#;

const ORDER_ITEMS: &str = r#"
    SELECT comp.Model AS model,
           d.Quantity AS quantity,
           d.UnitPrice AS unit_price
    FROM OrderDetail d
    JOIN Computer comp ON d.ComputerID = comp.ComputerID
    WHERE d.OrderID = ?
    ORDER BY d.DetailID
"#;

pub struct OrderService;

impl OrderService {
    /// Open an empty order dated today (server local date) with a zero total.
    pub async fn create(pool: &SqlitePool, o: &OrderCreate) -> Result<i64, AppError> {
        Self::create_on(pool, o, Local::now().date_naive()).await
    }

    /// Same as [`OrderService::create`] with an explicit order date.
    pub async fn create_on(pool: &SqlitePool, o: &OrderCreate, date: NaiveDate) -> Result<i64, AppError> {
        let mut tx = begin_write(pool).await?;
        if !exists(&mut *tx, CUSTOMER_EXISTS, o.customer_id).await? {
            return Err(AppError::NotFound(format!("customer {}", o.customer_id)));
        }
        if !exists(&mut *tx, SELLER_EXISTS, o.seller_id).await? {
            return Err(AppError::NotFound(format!("seller {}", o.seller_id)));
        }
        tracing::debug!(sql = %INSERT_ORDER, "query (tx)");
        let id = sqlx::query(INSERT_ORDER)
            .bind(date)
            .bind(o.customer_id)
            .bind(o.seller_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(e, "order"))?
            .last_insert_rowid();
        tx.commit().await?;
        tracing::info!(order_id = id, customer_id = o.customer_id, seller_id = o.seller_id, "order created");
        Ok(id)
    }

    /// Append a line to `order_id` and rebuild the order total, all in one transaction.
    ///
    /// The unit price is the computer's price right now; later price changes do not touch it.
    /// A missing order or computer fails with `NotFound` and leaves the store untouched.
    pub async fn add_item(pool: &SqlitePool, order_id: i64, item: &OrderItemCreate) -> Result<f64, AppError> {
        let mut tx = begin_write(pool).await?;
        if !exists(&mut *tx, ORDER_EXISTS, order_id).await? {
            return Err(AppError::NotFound(format!("order {}", order_id)));
        }

        tracing::debug!(sql = %COMPUTER_PRICE, "query (tx)");
        let unit_price = sqlx::query_scalar::<_, f64>(COMPUTER_PRICE)
            .bind(item.computer_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("computer {}", item.computer_id)))?;

        tracing::debug!(sql = %INSERT_DETAIL, "query (tx)");
        sqlx::query(INSERT_DETAIL)
            .bind(order_id)
            .bind(item.computer_id)
            .bind(item.quantity)
            .bind(unit_price)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(e, "order item"))?;

        let total = Self::recompute_total(&mut *tx, order_id).await?;
        tx.commit().await?;
        tracing::info!(
            order_id,
            computer_id = item.computer_id,
            quantity = item.quantity,
            unit_price,
            total,
            "item added"
        );
        Ok(total)
    }

    /// Overwrite the stored total with the aggregate over every detail row of the order.
    async fn recompute_total(conn: &mut SqliteConnection, order_id: i64) -> Result<f64, AppError> {
        tracing::debug!(sql = %RECOMPUTE_TOTAL, "query (tx)");
        sqlx::query(RECOMPUTE_TOTAL)
            .bind(order_id)
            .bind(order_id)
            .execute(&mut *conn)
            .await?;
        let total = sqlx::query_scalar::<_, f64>("SELECT TotalAmount FROM OrderTable WHERE OrderID = ?")
            .bind(order_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(total)
    }

    /// Order header plus its lines, or `NotFound`.
    pub async fn get(pool: &SqlitePool, order_id: i64) -> Result<OrderView, AppError> {
        let mut conn = pool.acquire().await?;
        tracing::debug!(sql = %ORDER_HEADER, "query");
        let order = sqlx::query_as::<_, OrderHeader>(ORDER_HEADER)
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {}", order_id)))?;

        tracing::debug!(sql = %ORDER_ITEMS, "query");
        let items = sqlx::query_as::<_, OrderItemView>(ORDER_ITEMS)
            .bind(order_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(OrderView { order, items })
    }
}
