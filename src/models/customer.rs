use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CustomerCreate {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub telephone: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Listing projection; the address is not part of it.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CustomerSummary {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub email: String,
}
