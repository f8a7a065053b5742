//! Liveness probe
//!
//! Never touches the store; reports the bound schema and how many pooled
//! sessions are open, so it stays fast when the database is down.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct PoolStatus {
    pub open: u32,
    pub idle: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub schema: String,
    pub pool: PoolStatus,
}

fn snapshot(state: &AppState) -> HealthResponse {
    HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        schema: state.config.db.schema.as_str().to_owned(),
        pool: PoolStatus {
            open: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    }
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(snapshot(&state))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
