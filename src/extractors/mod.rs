//! Request extractors.

mod json;
pub use json::ApiJson;
