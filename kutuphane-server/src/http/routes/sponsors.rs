//! Sponsor endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::MessageResponse;
use crate::db::{SponsorRepo, SponsorRow};
use crate::http::error::ApiError;
use crate::http::extractors::{FilterQuery, JsonBody};
use crate::http::server::AppState;
use crate::models::{CreateSponsorRequest, NewSponsor};

/// Sponsor response
#[derive(Debug, Serialize)]
pub struct SponsorResponse {
    pub id: i64,
    pub ad: String,
    pub kutuphane: String,
    pub ulke: String,
    pub sehir: String,
}

impl From<SponsorRow> for SponsorResponse {
    fn from(r: SponsorRow) -> Self {
        Self {
            id: r.id,
            ad: r.name,
            kutuphane: r.library_name,
            ulke: r.country,
            sehir: r.city,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SponsorsEnvelope {
    pub sponsorlar: Vec<SponsorResponse>,
}

/// GET /sponsor/getir
async fn list_sponsors(
    State(state): State<Arc<AppState>>,
    FilterQuery(filter): FilterQuery,
) -> Result<Json<SponsorsEnvelope>, ApiError> {
    let rows = SponsorRepo::new(&state.pool).list(&filter).await?;

    Ok(Json(SponsorsEnvelope {
        sponsorlar: rows.into_iter().map(SponsorResponse::from).collect(),
    }))
}

/// POST /sponsor/ekle - create a funder linked to one library
async fn create_sponsor(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateSponsorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let sponsor = NewSponsor::try_from(req)?;
    SponsorRepo::new(&state.pool).create(&sponsor).await?;

    Ok(Json(MessageResponse::new("Sponsor başarıyla eklendi")))
}

/// Sponsor routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sponsor/getir", get(list_sponsors))
        .route("/sponsor/ekle", post(create_sponsor))
}
