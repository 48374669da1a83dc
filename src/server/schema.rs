//! Runtime Schema Self-Heal
//!
//! Best-effort schema initializer for deploys where the migration step
//! could not run against the production database. When enabled via
//! `ENABLE_RUNTIME_MIGRATION=1` and the primary tables are missing, the
//! bundled migration SQL is applied under a PostgreSQL advisory lock so
//! concurrent cold starts across instances serialize instead of racing.
//!
//! The lock is taken and released on the same pooled connection (advisory
//! locks are per-connection) and released unconditionally, also when the
//! apply fails.

use sqlx::{Connection, Executor, PgPool};

use crate::error::ApiError;
use crate::server::config::ServerConfig;

/// Well-known advisory lock key serializing schema repair.
const SCHEMA_LOCK_KEY: i64 = 886_611_223;

/// The bundled schema, idempotent by construction.
const SCHEMA_SQL: &str = include_str!("../../migrations/0001_init.sql");

/// Whether an error means the schema was never applied.
fn is_undefined_table(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("42P01"),
        _ => false,
    }
}

/// Ensure the primary tables exist, repairing the schema once if needed.
///
/// Probes with a trivial `users` count. Anything other than an
/// undefined-table error is left for the caller's real query to surface;
/// a missing table triggers the locked repair path. A failed repair is
/// reported, not swallowed.
pub async fn ensure_schema(pool: &PgPool, config: &ServerConfig) -> Result<(), ApiError> {
    if !config.runtime_migration {
        return Ok(());
    }

    let probe = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM users")
        .fetch_one(pool)
        .await;
    match probe {
        Ok(_) => return Ok(()),
        Err(e) if is_undefined_table(&e) => {
            tracing::warn!("Primary tables missing; attempting schema self-heal");
        }
        Err(_) => return Ok(()),
    }

    let mut conn = pool.acquire().await.map_err(ApiError::from)?;

    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await
        .map_err(ApiError::from)?;

    // Called as `Executor::execute(conn, sql)` rather than
    // `RawSql::execute(sql, conn)`: the latter form trips a rustc
    // higher-ranked lifetime bug that makes every future awaiting this
    // one non-Send ("implementation of `Executor` is not general enough").
    let applied = (&mut *conn).execute(sqlx::raw_sql(SCHEMA_SQL)).await;

    // Release the lock before reporting the apply result, also on failure.
    let unlocked = sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await;
    if let Err(e) = unlocked {
        // The lock dies with the connection; close it rather than return
        // a locked connection to the pool.
        tracing::error!("Failed to release schema advisory lock: {:?}", e);
        let _ = conn.detach().close().await;
    }

    match applied {
        Ok(_) => {
            tracing::info!("Schema self-heal applied");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Schema self-heal failed: {:?}", e);
            Err(ApiError::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_key_is_stable() {
        // Shared with the original deployment; changing it would let two
        // versions migrate concurrently.
        assert_eq!(SCHEMA_LOCK_KEY, 886_611_223);
    }

    #[test]
    fn test_bundled_schema_covers_primary_tables() {
        for table in ["users", "surveys", "questions", "responses", "answers"] {
            assert!(
                SCHEMA_SQL.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")),
                "schema must create {table}"
            );
        }
    }
}
