//! Statistics endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{BookAvailability, MonthlyLoanCount, StatsRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct MonthlyLoanResponse {
    pub ay: String,
    pub kiralama_sayisi: i64,
}

impl From<MonthlyLoanCount> for MonthlyLoanResponse {
    fn from(r: MonthlyLoanCount) -> Self {
        Self {
            ay: r.month,
            kiralama_sayisi: r.loan_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlyLoansEnvelope {
    pub aylik_kiralama: Vec<MonthlyLoanResponse>,
}

#[derive(Debug, Serialize)]
pub struct BookStatusResponse {
    pub kitap_adi: String,
    pub kiralanma_sayisi: i64,
    pub kiralanabilir_adet: i64,
}

impl From<BookAvailability> for BookStatusResponse {
    fn from(r: BookAvailability) -> Self {
        Self {
            kitap_adi: r.title,
            kiralanma_sayisi: r.loan_count,
            kiralanabilir_adet: r.available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookStatusEnvelope {
    pub kitap_durumu: Vec<BookStatusResponse>,
}

/// GET /istatistik/aylik-kiralama - monthly loan counts, oldest first
async fn monthly_loans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MonthlyLoansEnvelope>, ApiError> {
    let rows = StatsRepo::new(&state.pool).monthly_loan_counts().await?;

    Ok(Json(MonthlyLoansEnvelope {
        aylik_kiralama: rows.into_iter().map(MonthlyLoanResponse::from).collect(),
    }))
}

/// GET /istatistik/kitap-durumu - loans and remaining copies per title
async fn book_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BookStatusEnvelope>, ApiError> {
    let rows = StatsRepo::new(&state.pool).book_availability().await?;

    Ok(Json(BookStatusEnvelope {
        kitap_durumu: rows.into_iter().map(BookStatusResponse::from).collect(),
    }))
}

/// Statistics routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/istatistik/aylik-kiralama", get(monthly_loans))
        .route("/istatistik/kitap-durumu", get(book_status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_availability_serialized_as_is() {
        let json = serde_json::to_value(BookStatusEnvelope {
            kitap_durumu: vec![BookStatusResponse::from(BookAvailability {
                title: "Tutunamayanlar".into(),
                loan_count: 5,
                available: -2,
            })],
        })
        .unwrap();
        assert_eq!(json["kitap_durumu"][0]["kiralanabilir_adet"], -2);
        assert_eq!(json["kitap_durumu"][0]["kiralanma_sayisi"], 5);
    }
}
