//! Library repository
//!
//! - list: libraries joined with their location, filtered by country/city
//! - create: location + library in one transaction

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::db::DbError;
use crate::models::{FilterColumns, ListFilter, NewLibrary};

/// Library joined with its location
#[derive(Debug, Clone, FromRow)]
pub struct LibraryRow {
    pub id: i64,
    pub name: String,
    pub opening_hours: Option<String>,
    pub country: String,
    pub city: String,
}

/// Library repository
pub struct LibraryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LibraryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List libraries matching `filter` (country and city only).
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<LibraryRow>, DbError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            r#"
            SELECT l.library_id AS id, l.name, l.opening_hours, loc.country, loc.city
            FROM libraries l
            JOIN location loc ON l.location_id = loc.location_id
            "#,
        );
        filter.push_where(&mut qb, FilterColumns::LOCATION);
        qb.push(" ORDER BY l.library_id");

        tracing::debug!(?filter, "listing libraries");
        let mut conn = self.pool.acquire().await?;
        let rows = qb
            .build_query_as::<LibraryRow>()
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Create a library and its location (atomic).
    ///
    /// Returns the new library id. If the library insert fails the location
    /// row is rolled back with it.
    pub async fn create(&self, new: &NewLibrary) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let (location_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO location (country, city)
            VALUES ($1, $2)
            RETURNING location_id
            "#,
        )
        .bind(&new.country)
        .bind(&new.city)
        .fetch_one(&mut *tx)
        .await?;

        let (library_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO libraries (name, opening_hours, location_id)
            VALUES ($1, $2, $3)
            RETURNING library_id
            "#,
        )
        .bind(&new.name)
        .bind(new.opening_hours.as_deref())
        .bind(location_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(library_id, location_id, "library created");
        Ok(library_id)
    }
}
