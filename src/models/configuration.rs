use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hardware spec shared by any number of computers.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ConfigurationCreate {
    pub processor: String,
    pub ram: String,
    pub storage: String,
    #[serde(default)]
    pub gpu: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfigurationCreated {
    pub configuration_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ConfigurationRow {
    pub configuration_id: i64,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub gpu: Option<String>,
    pub os: Option<String>,
}
