//! kutuphane-server: HTTP backend for library records
//!
//! Exposes libraries, staff, sponsors and visitors stored in a PostgreSQL
//! schema, plus two loan statistics reports, as JSON over HTTP.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{AppConfig, ConfigError, DbConfig, SchemaName, Secret};
pub use db::{create_pool, create_pool_lazy, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
