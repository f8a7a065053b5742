//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Every session is bound to the configured schema on connect
//! - Identities are generated by the store (`RETURNING`), never max+1
//! - Multi-step writes run in a single transaction owned by the repository
//! - Rely on DB constraints, classify their errors - no check-then-insert

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, create_pool_lazy, describe_session, SessionInfo};
pub use repos::*;
