//! Menu API: three-level menu / submenu / dish REST backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use error::{AppError, EntityKind};
pub use migration::{apply_migrations, ensure_database_exists};
pub use routes::{api_routes, ops_routes};
pub use state::AppState;
