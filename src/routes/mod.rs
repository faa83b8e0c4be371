//! Route tables.

mod api;
mod ops;

pub use api::api_routes;
pub use ops::ops_routes;
