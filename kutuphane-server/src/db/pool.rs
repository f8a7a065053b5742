//! Database connection pool management
//!
//! Every physical connection is bound to the configured schema with
//! `SET search_path` as soon as it is opened, so statements never need a
//! schema prefix. Sessions are scoped: `acquire()`/`begin()` guards return
//! the connection to the pool on drop, and an uncommitted transaction is
//! rolled back on drop.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Executor, PgPool};

use super::DbError;
use crate::config::DbConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free session before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a schema-bound PostgreSQL connection pool.
///
/// Connects eagerly, so unreachable hosts and rejected credentials surface
/// here as [`DbError::Connection`].
///
/// # Example
///
/// ```ignore
/// let config = AppConfig::from_env()?;
/// let pool = create_pool(&config.db).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, DbError> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        schema = %config.schema.as_str(),
        "Connecting to database"
    );
    let pool = pool_options(config)
        .connect_with(connect_options(config))
        .await?;
    Ok(pool)
}

/// Create the same pool without opening any connection until first use.
pub fn create_pool_lazy(config: &DbConfig) -> PgPool {
    pool_options(config).connect_lazy_with(connect_options(config))
}

fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(config.password.expose())
}

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    let set_search_path = format!("SET search_path TO {}", config.schema.quoted());

    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .after_connect(move |conn, _meta| {
            let stmt = set_search_path.clone();
            Box::pin(async move {
                conn.execute(stmt.as_str()).await?;
                Ok(())
            })
        })
}

/// What a freshly acquired session reports about itself.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// `None` when the bound schema does not exist.
    pub current_schema: Option<String>,
    pub server_version: String,
}

/// Acquire one session and report its bound schema and server version.
pub async fn describe_session(pool: &PgPool) -> Result<SessionInfo, DbError> {
    let mut conn = pool.acquire().await?;
    let (current_schema, server_version): (Option<String>, String) =
        sqlx::query_as("SELECT current_schema()::text, version()")
            .fetch_one(&mut *conn)
            .await?;

    Ok(SessionInfo {
        current_schema,
        server_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SchemaName, Secret};

    fn config(schema: &str) -> DbConfig {
        DbConfig {
            host: "127.0.0.1".into(),
            port: 5432,
            database: "kutuphane".into(),
            user: "app".into(),
            password: Secret::new("secret"),
            schema: SchemaName::new(schema).unwrap(),
        }
    }

    #[tokio::test]
    async fn lazy_pool_opens_nothing() {
        let pool = create_pool_lazy(&config("library1"));
        assert_eq!(pool.size(), 0);
    }

    // Integration tests require a real database
    // Run with: DB_HOST=... DB_NAME=... DB_USER=... DB_PASSWORD=... cargo test -p kutuphane-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn session_is_bound_to_schema() {
        let app = crate::AppConfig::from_env().expect("DB_* variables required");
        let pool = create_pool(&app.db).await.expect("pool creation failed");

        let info = describe_session(&pool).await.expect("describe failed");
        assert_eq!(info.current_schema.as_deref(), Some(app.db.schema.as_str()));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn rejected_credentials_are_connection_errors() {
        let mut app = crate::AppConfig::from_env().expect("DB_* variables required");
        app.db.password = Secret::new("definitely-not-the-password");

        let err = create_pool(&app.db).await.unwrap_err();
        assert!(matches!(err, DbError::Connection(_)));
    }
}
