//! Database access layer
//!
//! Everything that talks to the database goes through [`DatabasePool`]: a
//! cloneable handle over the bounded [`ConnectionPool`] that checks a
//! connection out, runs the caller's queries against it, and checks it back
//! in on every exit path.

mod manager;
mod pool;

pub use manager::{ConnectionManager, DatabaseManager};
pub use pool::{ConnectionPool, PoolError, PoolStatus};

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;

use crate::config::PoolConfig;

/// Database operation error surfaced to the service layer
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Pool capacity reached and the bounded wait timed out
    #[error("database connection pool exhausted, try again later")]
    PoolExhausted,

    /// A new physical connection could not be opened
    #[error("database connection failed: {0}")]
    ConnectionFailed(#[source] DbErr),

    /// The query itself failed
    #[error("database operation failed: {0}")]
    QueryFailed(#[from] DbErr),
}

impl From<PoolError> for DatabaseError {
    fn from(error: PoolError) -> Self {
        match error {
            PoolError::Exhausted { .. } => DatabaseError::PoolExhausted,
            PoolError::OpenFailed(e) => DatabaseError::ConnectionFailed(e),
        }
    }
}

/// Shared handle to the process-wide connection pool
///
/// One instance is created at startup and injected into every component that
/// needs database access (actix `Data`, service arguments). Cloning is cheap;
/// all clones share the same pool.
#[derive(Clone)]
pub struct DatabasePool {
    pool: Arc<ConnectionPool<DatabaseManager>>,
}

impl DatabasePool {
    pub fn new(manager: DatabaseManager, config: &PoolConfig) -> Self {
        Self {
            pool: Arc::new(ConnectionPool::new(manager, config)),
        }
    }

    /// Run `f` against a pooled connection.
    ///
    /// The scoped acquire/use/release pattern: the connection is checked out
    /// before `f` runs and released after it finishes, whether it succeeded
    /// or not. The closure bound is the same shape SeaORM uses for
    /// transactions:
    ///
    /// ```no_run
    /// # use cine_magenta::database::DatabasePool;
    /// # async fn example(pool: &DatabasePool) -> anyhow::Result<()> {
    /// pool.execute(|db| Box::pin(async move { db.ping().await }))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute<F, T>(&self, f: F) -> Result<T, DatabaseError>
    where
        F: for<'c> FnOnce(
            &'c DatabaseConnection,
        )
            -> Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>,
    {
        let conn = self.pool.acquire().await?;
        let result = f(&conn).await;
        self.pool.release(conn).await;

        result.map_err(DatabaseError::from)
    }

    /// Check a connection out directly. Prefer [`execute`](Self::execute);
    /// a caller holding a raw handle is responsible for releasing it on
    /// every path.
    pub async fn acquire(&self) -> Result<DatabaseConnection, PoolError> {
        self.pool.acquire().await
    }

    /// Hand a checked-out connection back
    pub async fn release(&self, conn: DatabaseConnection) {
        self.pool.release(conn).await;
    }

    /// End-to-end acquire/release probe, used by health checks
    pub async fn test_connection(&self) -> bool {
        self.pool.test_connection().await
    }

    /// Close every idle connection; part of process shutdown
    pub async fn close_all(&self) {
        self.pool.close_all().await;
    }

    pub fn status(&self) -> PoolStatus {
        self.pool.status()
    }

    pub fn is_connected(&self) -> bool {
        self.pool.is_connected()
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("status", &self.status())
            .finish()
    }
}
