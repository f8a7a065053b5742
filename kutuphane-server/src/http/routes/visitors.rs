//! Visitor endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use super::MessageResponse;
use crate::db::{VisitorRepo, VisitorRow};
use crate::http::error::ApiError;
use crate::http::extractors::{FilterQuery, JsonBody, PathId};
use crate::http::server::AppState;
use crate::models::{NewVisitor, VisitorRequest, VisitorUpdate};

/// Visitor response
#[derive(Debug, Serialize)]
pub struct VisitorResponse {
    pub id: i64,
    pub ad: String,
    pub soyad: String,
    pub email: Option<String>,
    pub telefon: Option<String>,
    pub kutuphane: String,
    pub ulke: String,
    pub sehir: String,
}

impl From<VisitorRow> for VisitorResponse {
    fn from(r: VisitorRow) -> Self {
        Self {
            id: r.id,
            ad: r.name,
            soyad: r.surname,
            email: r.email,
            telefon: r.phone,
            kutuphane: r.library_name,
            ulke: r.country,
            sehir: r.city,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VisitorsEnvelope {
    pub ziyaretciler: Vec<VisitorResponse>,
}

/// GET /ziyaretci/getir
async fn list_visitors(
    State(state): State<Arc<AppState>>,
    FilterQuery(filter): FilterQuery,
) -> Result<Json<VisitorsEnvelope>, ApiError> {
    let rows = VisitorRepo::new(&state.pool).list(&filter).await?;

    Ok(Json(VisitorsEnvelope {
        ziyaretciler: rows.into_iter().map(VisitorResponse::from).collect(),
    }))
}

/// POST /ziyaretci/ekle - create a visitor registered at one library
async fn create_visitor(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<VisitorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let visitor = NewVisitor::try_from(req)?;
    VisitorRepo::new(&state.pool).create(&visitor).await?;

    Ok(Json(MessageResponse::new("Ziyaretçi başarıyla eklendi")))
}

/// DELETE /ziyaretci/sil/{id} - succeeds for unknown ids too
async fn delete_visitor(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<MessageResponse>, ApiError> {
    VisitorRepo::new(&state.pool).delete(id).await?;

    Ok(Json(MessageResponse::new("Ziyaretçi başarıyla silindi")))
}

/// PUT /ziyaretci/duzenle/{id}
async fn update_visitor(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
    JsonBody(req): JsonBody<VisitorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let update = VisitorUpdate::try_from(req)?;
    VisitorRepo::new(&state.pool).update(id, &update).await?;

    Ok(Json(MessageResponse::new("Ziyaretçi başarıyla güncellendi")))
}

/// Visitor routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ziyaretci/getir", get(list_visitors))
        .route("/ziyaretci/ekle", post(create_visitor))
        .route("/ziyaretci/sil/{id}", delete(delete_visitor))
        .route("/ziyaretci/duzenle/{id}", put(update_visitor))
}
