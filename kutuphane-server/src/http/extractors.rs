//! Custom Axum extractors
//!
//! Rejections are turned into [`ApiError`] so malformed input gets the same
//! `{ "error": ... }` envelope as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::id::parse_path_id;
use crate::models::{ListFilter, ValidationError};

/// JSON body whose rejection is an [`ApiError`]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                })
            })?;
        Ok(Self(value))
    }
}

/// Extract and validate an integer id from the path
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        let id = parse_path_id("id", &raw)?;
        Ok(Self(id))
    }
}

/// List filter from the query string
///
/// Read as raw pairs so a repeated key keeps its first value instead of
/// failing the request.
pub struct FilterQuery(pub ListFilter);

impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(ListFilter::from_pairs(pairs)))
    }
}
