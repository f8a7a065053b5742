//! Sponsor repository - funders and their library links

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::db::DbError;
use crate::models::{FilterColumns, ListFilter, NewSponsor};

/// Funder joined through `library_funders`; one row per funded library
#[derive(Debug, Clone, FromRow)]
pub struct SponsorRow {
    pub id: i64,
    pub name: String,
    pub library_name: String,
    pub country: String,
    pub city: String,
}

/// Sponsor repository
pub struct SponsorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SponsorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<SponsorRow>, DbError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            r#"
            SELECT f.funder_id AS id, f.name, l.name AS library_name,
                   loc.country, loc.city
            FROM funders f
            JOIN library_funders lf ON f.funder_id = lf.funder_id
            JOIN libraries l ON lf.library_id = l.library_id
            JOIN location loc ON l.location_id = loc.location_id
            "#,
        );
        filter.push_where(&mut qb, FilterColumns::LOCATION_AND_LIBRARY);
        qb.push(" ORDER BY f.funder_id, l.library_id");

        tracing::debug!(?filter, "listing sponsors");
        let mut conn = self.pool.acquire().await?;
        let rows = qb
            .build_query_as::<SponsorRow>()
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Create a funder and link it to a library (atomic).
    pub async fn create(&self, new: &NewSponsor) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let (funder_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO funders (name)
            VALUES ($1)
            RETURNING funder_id
            "#,
        )
        .bind(&new.name)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO library_funders (library_id, funder_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(new.library_id)
        .bind(funder_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(funder_id, library_id = new.library_id, "sponsor created");
        Ok(funder_id)
    }
}
