//! Staff repository

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::db::DbError;
use crate::models::{FilterColumns, ListFilter, NewStaff};

/// Staff member with library and location
#[derive(Debug, Clone, FromRow)]
pub struct StaffRow {
    pub id: i64,
    pub name: String,
    pub job_title: String,
    pub contact_number: String,
    pub library_name: String,
    pub country: String,
    pub city: String,
}

/// Staff repository
pub struct StaffRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StaffRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<StaffRow>, DbError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            r#"
            SELECT ls.staff_id AS id, ls.name, ls.job_title, ls.contact_number,
                   l.name AS library_name, loc.country, loc.city
            FROM library_staff ls
            JOIN libraries l ON ls.library_id = l.library_id
            JOIN location loc ON l.location_id = loc.location_id
            "#,
        );
        filter.push_where(&mut qb, FilterColumns::LOCATION_AND_LIBRARY);
        qb.push(" ORDER BY ls.staff_id");

        tracing::debug!(?filter, "listing staff");
        let mut conn = self.pool.acquire().await?;
        let rows = qb.build_query_as::<StaffRow>().fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// Single insert; an unknown library id is a constraint error.
    pub async fn create(&self, new: &NewStaff) -> Result<i64, DbError> {
        let mut conn = self.pool.acquire().await?;
        let (staff_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO library_staff (name, job_title, contact_number, library_id)
            VALUES ($1, $2, $3, $4)
            RETURNING staff_id
            "#,
        )
        .bind(&new.name)
        .bind(&new.job_title)
        .bind(&new.contact_number)
        .bind(new.library_id)
        .fetch_one(&mut *conn)
        .await?;

        tracing::debug!(staff_id, library_id = new.library_id, "staff created");
        Ok(staff_id)
    }
}
