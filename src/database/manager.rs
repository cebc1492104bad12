//! Driver binding for the connection pool
//!
//! The pool itself only needs three primitives from the database driver:
//! open a session, probe a session, close a session. `ConnectionManager`
//! captures that seam so the pool can be exercised in tests without a
//! database server, and `DatabaseManager` is the production implementation
//! on top of SeaORM.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Opens, probes and closes individual database sessions on behalf of the pool
#[async_trait]
pub trait ConnectionManager: Send + Sync + 'static {
    type Connection: Send + 'static;

    /// Open one new physical connection
    async fn connect(&self) -> Result<Self::Connection, DbErr>;

    /// Cheap liveness probe against the server
    async fn is_valid(&self, conn: &Self::Connection) -> bool;

    /// Permanently close the connection. Must not fail the caller.
    async fn close(&self, conn: Self::Connection);
}

/// SeaORM-backed connection manager
///
/// Every connection it opens is pinned to exactly one underlying session
/// (`max_connections(1)`), so a pooled handle is one database session and
/// never a nested pool.
pub struct DatabaseManager {
    url: String,
    connect_timeout: Duration,
}

impl DatabaseManager {
    pub fn new(url: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            url: url.into(),
            connect_timeout,
        }
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(
            config.url(),
            Duration::from_millis(config.connect_timeout_ms),
        )
    }
}

#[async_trait]
impl ConnectionManager for DatabaseManager {
    type Connection = DatabaseConnection;

    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(1)
            .min_connections(1)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(false);

        Database::connect(options).await
    }

    async fn is_valid(&self, conn: &DatabaseConnection) -> bool {
        conn.ping().await.is_ok()
    }

    async fn close(&self, conn: DatabaseConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close database connection");
        }
    }
}
