//! PC store: REST backend for customers, sellers, hardware configurations, computers and orders.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::connect;
