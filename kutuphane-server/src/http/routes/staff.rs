//! Staff endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::MessageResponse;
use crate::db::{StaffRepo, StaffRow};
use crate::http::error::ApiError;
use crate::http::extractors::{FilterQuery, JsonBody};
use crate::http::server::AppState;
use crate::models::{CreateStaffRequest, NewStaff};

/// Staff response
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: i64,
    pub ad: String,
    pub pozisyon: String,
    pub telefon: String,
    pub kutuphane: String,
    pub ulke: String,
    pub sehir: String,
}

impl From<StaffRow> for StaffResponse {
    fn from(r: StaffRow) -> Self {
        Self {
            id: r.id,
            ad: r.name,
            pozisyon: r.job_title,
            telefon: r.contact_number,
            kutuphane: r.library_name,
            ulke: r.country,
            sehir: r.city,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StaffEnvelope {
    pub calisanlar: Vec<StaffResponse>,
}

/// GET /calisan/getir - list staff, optionally by `ulke`/`sehir`/`kutuphane`
async fn list_staff(
    State(state): State<Arc<AppState>>,
    FilterQuery(filter): FilterQuery,
) -> Result<Json<StaffEnvelope>, ApiError> {
    let rows = StaffRepo::new(&state.pool).list(&filter).await?;

    Ok(Json(StaffEnvelope {
        calisanlar: rows.into_iter().map(StaffResponse::from).collect(),
    }))
}

/// POST /calisan/ekle - create a staff member
async fn create_staff(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateStaffRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let staff = NewStaff::try_from(req)?;
    StaffRepo::new(&state.pool).create(&staff).await?;

    Ok(Json(MessageResponse::new("Çalışan başarıyla eklendi")))
}

/// Staff routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calisan/getir", get(list_staff))
        .route("/calisan/ekle", post(create_staff))
}
