//! Visitor repository
//!
//! Visitors are the only entity this service edits or destroys:
//! - create: visitor + library membership in one transaction
//! - update: scalar fields, and the membership when a library is given
//! - delete: memberships, loans, then the visitor, in one transaction

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::db::DbError;
use crate::models::{FilterColumns, ListFilter, NewVisitor, VisitorUpdate};

/// Visitor with one of its libraries
#[derive(Debug, Clone, FromRow)]
pub struct VisitorRow {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub library_name: String,
    pub country: String,
    pub city: String,
}

/// Visitor repository
pub struct VisitorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VisitorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List visitors matching `filter`, without duplicate rows.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<VisitorRow>, DbError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            r#"
            SELECT DISTINCT v.visitor_id AS id, v.name, v.surname, v.email,
                   v.phone_number AS phone, l.name AS library_name,
                   loc.country, loc.city
            FROM visitors v
            JOIN visitor_library vl ON v.visitor_id = vl.visitor_id
            JOIN libraries l ON vl.library_id = l.library_id
            JOIN location loc ON l.location_id = loc.location_id
            "#,
        );
        filter.push_where(&mut qb, FilterColumns::LOCATION_AND_LIBRARY);
        qb.push(" ORDER BY id, library_name");

        tracing::debug!(?filter, "listing visitors");
        let mut conn = self.pool.acquire().await?;
        let rows = qb
            .build_query_as::<VisitorRow>()
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Create a visitor and its library membership (atomic).
    pub async fn create(&self, new: &NewVisitor) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let (visitor_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO visitors (name, surname, email, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING visitor_id
            "#,
        )
        .bind(&new.name)
        .bind(&new.surname)
        .bind(new.email.as_deref())
        .bind(new.phone.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO visitor_library (visitor_id, library_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(visitor_id)
        .bind(new.library_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(visitor_id, library_id = new.library_id, "visitor created");
        Ok(visitor_id)
    }

    /// Overwrite a visitor's fields and, if given, its library membership.
    ///
    /// Returns `NotFound` (and changes nothing) when no visitor has `id`.
    pub async fn update(&self, id: i64, update: &VisitorUpdate) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE visitors
            SET name = $1,
                surname = $2,
                email = $3,
                phone_number = $4
            WHERE visitor_id = $5
            "#,
        )
        .bind(&update.name)
        .bind(&update.surname)
        .bind(update.email.as_deref())
        .bind(update.phone.as_deref())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            // tx dropped here: rolled back
            return Err(DbError::NotFound {
                resource: "visitor",
                id: id.to_string(),
            });
        }

        if let Some(library_id) = update.library_id {
            sqlx::query(
                r#"
                UPDATE visitor_library
                SET library_id = $1
                WHERE visitor_id = $2
                "#,
            )
            .bind(library_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(visitor_id = id, library_id = ?update.library_id, "visitor updated");
        Ok(())
    }

    /// Delete a visitor with its memberships and loans (atomic).
    ///
    /// Returns the number of visitor rows removed; an unknown id removes
    /// nothing and is not an error.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let memberships = sqlx::query("DELETE FROM visitor_library WHERE visitor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let loans = sqlx::query("DELETE FROM loans WHERE visitor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let visitors = sqlx::query("DELETE FROM visitors WHERE visitor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        tracing::debug!(visitor_id = id, memberships, loans, visitors, "visitor deleted");
        Ok(visitors)
    }
}
