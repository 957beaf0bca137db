use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Warranty length in months when the request leaves it out.
pub const DEFAULT_WARRANTY_MONTHS: i64 = 12;

fn default_warranty() -> i64 {
    DEFAULT_WARRANTY_MONTHS
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ComputerCreate {
    pub model: String,
    pub price: f64,
    pub configuration_id: i64,
    #[serde(default = "default_warranty")]
    pub warranty: i64,
}

/// A computer with its configuration's fields folded in.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ComputerListing {
    pub computer_id: i64,
    pub model: String,
    pub price: f64,
    /// Nullable in the schema; rows written by older clients may lack it.
    pub warranty: Option<i64>,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub gpu: Option<String>,
    pub os: Option<String>,
}
