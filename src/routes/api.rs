//! Store API routes.

use crate::handlers::{
    add_order_item, create_computer, create_configuration, create_customer, create_order, create_seller, get_order,
    list_computers, list_configurations, list_customers, list_sellers,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/sellers", get(list_sellers).post(create_seller))
        .route("/configurations", get(list_configurations).post(create_configuration))
        .route("/computers", get(list_computers).post(create_computer))
        .route("/orders", post(create_order))
        .route("/orders/:order_id", get(get_order))
        .route("/orders/:order_id/items", post(add_order_item))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
