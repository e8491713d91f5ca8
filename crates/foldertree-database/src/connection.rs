//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use foldertree_core::config::DatabaseConfig;
use foldertree_core::error::{AppError, ErrorKind};

use crate::repositories::FolderRepository;

/// Embedded schema migrations from the workspace `migrations/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connect to PostgreSQL and, if configured, apply pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        let db = Self { pool };
        if config.run_migrations {
            db.migrate().await?;
        }

        info!("PostgreSQL ready");
        Ok(db)
    }

    /// Apply all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        info!(
            available = MIGRATOR.iter().count(),
            "Running database migrations"
        );
        MIGRATOR.run(&self.pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })
    }

    /// A folder repository sharing this pool.
    pub fn folder_repository(&self) -> FolderRepository {
        FolderRepository::new(self.pool.clone())
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    let Some(at) = url[scheme_end..].rfind('@').map(|p| p + scheme_end) else {
        return url.to_string();
    };
    match url[scheme_end..at].find(':') {
        Some(colon) => format!("{}:****@{}", &url[..scheme_end + colon], &url[at + 1..]),
        None => url.to_string(),
    }
}
