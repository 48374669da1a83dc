//! Server Configuration
//!
//! Collects environment configuration once at startup into an explicit
//! [`ServerConfig`] that is passed through application state, and loads
//! the optional PostgreSQL connection pool.
//!
//! Configuration errors are logged but do not prevent server startup.
//! Without a database the server still serves pages and answers API
//! requests with 503, which keeps misconfigured deploys observable.

use sqlx::PgPool;

/// Default signing secret for local development only
const DEV_JWT_SECRET: &str = "dev-secret-change-me";

/// Process-wide configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind (SERVER_PORT, default 3000)
    pub port: u16,
    /// Symmetric secret for session token signing (JWT_SECRET)
    pub jwt_secret: String,
    /// Mark session cookies Secure (COOKIE_SECURE=1, i.e. served over TLS)
    pub cookie_secure: bool,
    /// Allow the runtime schema self-heal path (ENABLE_RUNTIME_MIGRATION=1)
    pub runtime_migration: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            DEV_JWT_SECRET.to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            port,
            jwt_secret,
            cookie_secure: env_flag("COOKIE_SECURE"),
            runtime_migration: env_flag("ENABLE_RUNTIME_MIGRATION"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}

/// Load and initialize the database connection pool
///
/// Reads `DATABASE_URL`, connects, and runs the bundled migrations.
///
/// # Returns
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created");

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // The runtime self-heal path can still repair a missing schema
            // later, so this is not fatal.
            tracing::error!("Failed to run database migrations: {:?}", e);
        }
    }

    Some(pool)
}
