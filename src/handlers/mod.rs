//! HTTP handlers, one per resource action. Each extracts its input, calls its service, and shapes the reply.

pub mod catalog;
pub mod orders;
pub mod parties;
pub use catalog::*;
pub use orders::*;
pub use parties::*;

use crate::error::AppError;

/// Parse a surrogate id from a path segment. Any integer is accepted; lookups decide whether it exists.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}
