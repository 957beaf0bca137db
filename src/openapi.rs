//! OpenAPI document for the store API, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::models::{
    ComputerCreate, ComputerListing, ConfigurationCreate, ConfigurationCreated, ConfigurationRow, CustomerCreate,
    CustomerSummary, OrderCreate, OrderCreated, OrderHeader, OrderItemCreate, OrderItemView, OrderView, SellerCreate,
    SellerRow,
};
use crate::response::StatusAck;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PC Store API",
        description = "Customers, sellers, hardware configurations, computers and orders for a computer retailer."
    ),
    paths(
        handlers::parties::create_customer,
        handlers::parties::list_customers,
        handlers::parties::create_seller,
        handlers::parties::list_sellers,
        handlers::catalog::create_configuration,
        handlers::catalog::list_configurations,
        handlers::catalog::create_computer,
        handlers::catalog::list_computers,
        handlers::orders::create_order,
        handlers::orders::add_order_item,
        handlers::orders::get_order,
    ),
    components(schemas(
        CustomerCreate,
        CustomerSummary,
        SellerCreate,
        SellerRow,
        ConfigurationCreate,
        ConfigurationCreated,
        ConfigurationRow,
        ComputerCreate,
        ComputerListing,
        OrderCreate,
        OrderCreated,
        OrderItemCreate,
        OrderHeader,
        OrderItemView,
        OrderView,
        StatusAck,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "customers", description = "Buyers"),
        (name = "sellers", description = "Sales staff"),
        (name = "configurations", description = "Reusable hardware specs"),
        (name = "computers", description = "Sellable models"),
        (name = "orders", description = "Orders and their line items")
    )
)]
pub struct ApiDoc;
