//! Loan statistics - read-only aggregate reports

use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Country the monthly loan report is restricted to.
pub const MONTHLY_REPORT_COUNTRY: &str = "Türkiye";

/// Loans in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MonthlyLoanCount {
    /// `YYYY-MM`
    pub month: String,
    pub loan_count: i64,
}

/// Loan and stock figures for one book title
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookAvailability {
    pub title: String,
    pub loan_count: i64,
    /// Held copies minus loans; negative when loans exceed stock.
    pub available: i64,
}

/// Statistics repository
pub struct StatsRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Loans per month for libraries in [`MONTHLY_REPORT_COUNTRY`], oldest month first.
    pub async fn monthly_loan_counts(&self) -> Result<Vec<MonthlyLoanCount>, DbError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, MonthlyLoanCount>(
            r#"
            SELECT to_char(ln.loan_date, 'YYYY-MM') AS month,
                   COUNT(*) AS loan_count
            FROM loans ln
            JOIN library_books lb ON ln.library_book_id = lb.library_book_id
            JOIN libraries l ON lb.library_id = l.library_id
            JOIN location loc ON l.location_id = loc.location_id
            WHERE loc.country = $1
            GROUP BY to_char(ln.loan_date, 'YYYY-MM')
            ORDER BY month
            "#,
        )
        .bind(MONTHLY_REPORT_COUNTRY)
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    /// Per title: total loans, and held copies minus loans, most loaned first.
    ///
    /// Loans are counted per holding before joining so that a holding's
    /// quantity is summed once regardless of how many loans it has.
    pub async fn book_availability(&self) -> Result<Vec<BookAvailability>, DbError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, BookAvailability>(
            r#"
            SELECT b.title,
                   COALESCE(SUM(lc.loan_count), 0)::BIGINT AS loan_count,
                   (COALESCE(SUM(lb.quantity), 0)
                    - COALESCE(SUM(lc.loan_count), 0))::BIGINT AS available
            FROM library_books lb
            JOIN books b ON lb.book_id = b.book_id
            LEFT JOIN (
                SELECT library_book_id, COUNT(*) AS loan_count
                FROM loans
                GROUP BY library_book_id
            ) lc ON lc.library_book_id = lb.library_book_id
            GROUP BY b.title
            ORDER BY loan_count DESC, b.title
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }
}
