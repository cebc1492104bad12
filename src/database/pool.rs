//! Bounded database connection pool
//!
//! Serializes access to a limited number of real database connections so
//! concurrent callers can share the server without each request opening a
//! fresh session. Idle handles sit in a bounded FIFO queue; two atomic
//! counters track how many sessions exist and how many are checked out.
//!
//! # Acquisition
//!
//! `acquire` first tries a non-blocking dequeue, then opens a new connection
//! if the pool is under capacity, and only blocks — bounded by the configured
//! timeout — when every slot is in use. Handles are liveness-checked on the
//! way out and on the way back in; a broken handle is closed and replaced
//! rather than handed to a caller.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use cine_magenta::config::PoolConfig;
//! use cine_magenta::database::{ConnectionPool, DatabaseManager};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = DatabaseManager::new("sqlite::memory:", Duration::from_secs(5));
//! let pool = ConnectionPool::new(manager, &PoolConfig::default());
//!
//! let conn = pool.acquire().await?;
//! // run statements against `conn` ...
//! pool.release(conn).await;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;
use utoipa::ToSchema;

use super::manager::ConnectionManager;
use crate::config::PoolConfig;

/// Failure modes of [`ConnectionPool::acquire`]
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// Capacity reached and no connection was released within the timeout
    #[error("connection pool exhausted: no connection became available within {waited_ms}ms")]
    Exhausted { waited_ms: u64 },

    /// The driver could not open a new physical connection
    #[error("failed to open database connection: {0}")]
    OpenFailed(#[source] sea_orm::DbErr),
}

/// Read-only snapshot of the pool counters
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct PoolStatus {
    /// Connections currently checked out by callers
    pub active: u32,
    /// Idle connections waiting in the pool
    pub available: u32,
    /// Connections currently alive (idle + checked out)
    pub total: u32,
    /// Configured capacity
    pub max_connections: u32,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "active: {}, available: {}, total: {}, max: {}",
            self.active, self.available, self.total, self.max_connections
        )
    }
}

/// Bounded pool of reusable database connections
///
/// Invariants: `0 <= active <= total <= max_connections`, and a checked-out
/// handle is owned by exactly one caller until it is passed back to
/// [`release`](Self::release) — enforced by move semantics, a handle cannot
/// be released twice.
pub struct ConnectionPool<M: ConnectionManager> {
    manager: M,
    /// Idle handles, FIFO. Capacity equals `max_connections`.
    idle_tx: flume::Sender<M::Connection>,
    idle_rx: flume::Receiver<M::Connection>,
    /// Connections alive: idle in the queue or checked out
    total: AtomicU32,
    /// Connections checked out
    active: AtomicU32,
    /// Set by `close_all`; a drained pool closes returned handles instead of
    /// re-queuing them
    drained: AtomicBool,
    max_connections: u32,
    acquire_timeout: Duration,
}

impl<M: ConnectionManager> ConnectionPool<M> {
    pub fn new(manager: M, config: &PoolConfig) -> Self {
        let (idle_tx, idle_rx) = flume::bounded(config.max_connections as usize);

        tracing::info!(
            max_connections = config.max_connections,
            acquire_timeout_ms = config.acquire_timeout_ms,
            "connection pool initialized"
        );

        Self {
            manager,
            idle_tx,
            idle_rx,
            total: AtomicU32::new(0),
            active: AtomicU32::new(0),
            drained: AtomicBool::new(false),
            max_connections: config.max_connections,
            acquire_timeout: Duration::from_millis(config.acquire_timeout_ms),
        }
    }

    /// Check out a connection.
    ///
    /// Returns an idle handle when one is available, opens a new session
    /// while under capacity, and otherwise waits — at most the configured
    /// acquire timeout — for another caller to release one. The returned
    /// handle is either freshly opened or has passed a liveness probe.
    pub async fn acquire(&self) -> Result<M::Connection, PoolError> {
        // Any acquire puts a drained pool back into service.
        self.drained.store(false, Ordering::SeqCst);

        // Fast path: an idle handle is ready.
        if let Ok(conn) = self.idle_rx.try_recv() {
            if self.manager.is_valid(&conn).await {
                self.active.fetch_add(1, Ordering::SeqCst);
                return Ok(conn);
            }
            tracing::warn!("idle connection failed liveness check, discarding");
            self.discard(conn).await;
        }

        // Under capacity: open a fresh session.
        if self.try_reserve_slot() {
            return self.open_reserved().await;
        }

        // At capacity: wait for a release, bounded by the acquire timeout.
        tracing::debug!(
            max_connections = self.max_connections,
            "connection pool full, waiting for a release"
        );
        let started = Instant::now();
        let conn = match tokio::time::timeout(self.acquire_timeout, self.idle_rx.recv_async()).await
        {
            Ok(Ok(conn)) => conn,
            // The sender half lives as long as the pool, so a disconnect is
            // equivalent to never receiving anything.
            Ok(Err(_)) | Err(_) => {
                return Err(PoolError::Exhausted {
                    waited_ms: started.elapsed().as_millis() as u64,
                });
            }
        };

        if self.manager.is_valid(&conn).await {
            self.active.fetch_add(1, Ordering::SeqCst);
            return Ok(conn);
        }

        // The handle went stale while idle; replace it instead of waiting again.
        tracing::warn!("pooled connection went stale while waiting, opening replacement");
        self.discard(conn).await;
        if self.try_reserve_slot() {
            return self.open_reserved().await;
        }

        // Another waiter grabbed the freed slot first.
        Err(PoolError::Exhausted {
            waited_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Return a checked-out connection to the pool.
    ///
    /// A live handle goes back into the idle queue; a broken one is closed
    /// and forgotten. Never blocks on pool capacity and never fails the
    /// caller — release runs in cleanup paths where an error would mask the
    /// outcome of the caller's actual work.
    pub async fn release(&self, conn: M::Connection) {
        if self.drained.load(Ordering::SeqCst) {
            // The pool was shut down while this handle was checked out.
            self.manager.close(conn).await;
        } else if !self.manager.is_valid(&conn).await {
            tracing::warn!("released connection failed liveness check, closing it");
            self.discard(conn).await;
        } else if let Err(err) = self.idle_tx.try_send(conn) {
            // Queue full: cannot normally happen while capacity tracks
            // `total`, handled defensively.
            tracing::warn!("idle queue full on release, closing connection");
            let (flume::TrySendError::Full(conn) | flume::TrySendError::Disconnected(conn)) = err;
            self.discard(conn).await;
        }

        let _ = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    /// Probe the pool end to end: check a connection out and straight back in.
    ///
    /// Used at startup and by the health endpoint. The handle is released on
    /// every path, success or failure.
    pub async fn test_connection(&self) -> bool {
        match self.acquire().await {
            Ok(conn) => {
                self.release(conn).await;
                tracing::debug!(status = %self.status(), "connection test succeeded");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "connection test failed");
                false
            }
        }
    }

    /// Close every idle connection and reset the counters.
    ///
    /// Handles currently checked out are not touched; they are closed when
    /// their holders release them. Idempotent — a second call finds an empty
    /// queue and zeroed counters. A later `acquire` re-enters service by
    /// opening fresh connections.
    pub async fn close_all(&self) {
        tracing::info!("closing all idle database connections");

        let mut closed = 0u32;
        while let Ok(conn) = self.idle_rx.try_recv() {
            self.manager.close(conn).await;
            closed += 1;
        }

        self.total.store(0, Ordering::SeqCst);
        self.active.store(0, Ordering::SeqCst);
        self.drained.store(true, Ordering::SeqCst);

        tracing::info!(closed, "connection pool drained");
    }

    pub fn active_connection_count(&self) -> u32 {
        self.active.load(Ordering::SeqCst)
    }

    pub fn available_connection_count(&self) -> u32 {
        self.idle_rx.len() as u32
    }

    pub fn total_connection_count(&self) -> u32 {
        self.total.load(Ordering::SeqCst)
    }

    /// True while at least one connection is alive
    pub fn is_connected(&self) -> bool {
        self.total_connection_count() > 0
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            active: self.active_connection_count(),
            available: self.available_connection_count(),
            total: self.total_connection_count(),
            max_connections: self.max_connections,
        }
    }

    /// Claim a capacity slot. The increment happens before the connection is
    /// opened so two racing callers cannot both push `total` past the limit.
    fn try_reserve_slot(&self) -> bool {
        self.total
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |total| {
                (total < self.max_connections).then_some(total + 1)
            })
            .is_ok()
    }

    /// Open a connection for a slot already reserved by `try_reserve_slot`.
    /// On failure the slot is given back.
    async fn open_reserved(&self) -> Result<M::Connection, PoolError> {
        match self.manager.connect().await {
            Ok(conn) => {
                self.active.fetch_add(1, Ordering::SeqCst);
                tracing::debug!(
                    total = self.total.load(Ordering::SeqCst),
                    max = self.max_connections,
                    "opened new database connection"
                );
                Ok(conn)
            }
            Err(e) => {
                let _ = self
                    .total
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
                Err(PoolError::OpenFailed(e))
            }
        }
    }

    /// Close a connection and drop it from the `total` count.
    async fn discard(&self, conn: M::Connection) {
        self.manager.close(conn).await;
        let _ = self
            .total
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

impl<M: ConnectionManager> fmt::Debug for ConnectionPool<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("status", &self.status())
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}
