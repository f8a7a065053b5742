//! Library endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::MessageResponse;
use crate::db::{LibraryRepo, LibraryRow};
use crate::http::error::ApiError;
use crate::http::extractors::{FilterQuery, JsonBody};
use crate::http::server::AppState;
use crate::models::{CreateLibraryRequest, NewLibrary};

/// Library response
#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub id: i64,
    pub ad: String,
    pub calisma_saatleri: Option<String>,
    pub ulke: String,
    pub sehir: String,
}

impl From<LibraryRow> for LibraryResponse {
    fn from(r: LibraryRow) -> Self {
        Self {
            id: r.id,
            ad: r.name,
            calisma_saatleri: r.opening_hours,
            ulke: r.country,
            sehir: r.city,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LibrariesEnvelope {
    pub kutuphaneler: Vec<LibraryResponse>,
}

/// GET /kutuphane/getir - list libraries, optionally by `ulke`/`sehir`
async fn list_libraries(
    State(state): State<Arc<AppState>>,
    FilterQuery(filter): FilterQuery,
) -> Result<Json<LibrariesEnvelope>, ApiError> {
    let rows = LibraryRepo::new(&state.pool).list(&filter).await?;

    Ok(Json(LibrariesEnvelope {
        kutuphaneler: rows.into_iter().map(LibraryResponse::from).collect(),
    }))
}

/// POST /kutuphane/ekle - create a library with its location
async fn create_library(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateLibraryRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let library = NewLibrary::try_from(req)?;
    LibraryRepo::new(&state.pool).create(&library).await?;

    Ok(Json(MessageResponse::new("Kütüphane başarıyla eklendi")))
}

/// Library routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/kutuphane/getir", get(list_libraries))
        .route("/kutuphane/ekle", post(create_library))
}
