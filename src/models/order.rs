use crate::error::AppError;
use crate::service::{RequestValidator, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub seller_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderCreated {
    pub order_id: i64,
}

/// One line to append to an order. The unit price is taken from the computer, never the client.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct OrderItemCreate {
    pub computer_id: i64,
    pub quantity: i64,
}

impl Validate for OrderItemCreate {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::positive("quantity", self.quantity)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct OrderHeader {
    pub id: i64,
    pub date: NaiveDate,
    pub total: f64,
    /// First and last name of the ordering customer.
    pub customer: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct OrderItemView {
    pub model: String,
    pub quantity: i64,
    pub unit_price: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderView {
    pub order: OrderHeader,
    pub items: Vec<OrderItemView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_quantity_is_rejected() {
        let item = OrderItemCreate {
            computer_id: 1,
            quantity: 0,
        };
        assert!(matches!(item.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn order_view_serializes_date_as_iso_day() {
        let view = OrderView {
            order: OrderHeader {
                id: 3,
                date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
                total: 3000.0,
                customer: "Ada Lovelace".into(),
            },
            items: vec![OrderItemView {
                model: "X1".into(),
                quantity: 3,
                unit_price: 1000.0,
            }],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            json!({
                "order": {"id": 3, "date": "2026-10-18", "total": 3000.0, "customer": "Ada Lovelace"},
                "items": [{"model": "X1", "quantity": 3, "unit_price": 1000.0}]
            })
        );
    }
}
