//! Request payloads and response rows, one file per resource.

pub mod computer;
pub mod configuration;
pub mod customer;
pub mod order;
pub mod seller;

pub use computer::*;
pub use configuration::*;
pub use customer::*;
pub use order::*;
pub use seller::*;
