//! Health check endpoints
//!
//! Provides endpoints for monitoring service health and database pool status

use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder, get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::{DatabasePool, PoolStatus};

/// Liveness health check response (simple)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LivenessResponse {
    /// Service status
    pub status: String,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
}

/// Health check response including the connection pool snapshot
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Database connection status
    pub database: String,
    /// Connection pool counters
    pub pool: PoolStatus,
}

/// Liveness check endpoint
///
/// Simple check that returns 200 OK if service is running.
/// This endpoint should ALWAYS return 200 OK (no dependencies checked).
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = LivenessResponse),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    let response = LivenessResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    };

    tracing::debug!("Liveness check: healthy");
    Json(response)
}

/// Detailed health check including database connectivity
///
/// Runs an acquire/release probe through the connection pool and reports
/// the pool counters
#[utoipa::path(
    get,
    path = "/health/db",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unavailable", body = HealthResponse),
    )
)]
#[get("/health/db")]
pub async fn health_db(pool: Data<DatabasePool>) -> impl Responder {
    // Acquire and immediately release one pooled connection
    let connected = pool.test_connection().await;
    let status = pool.status();

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        pool: status,
    };

    tracing::debug!(connected, pool = %status, "Database health check performed");

    if connected {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
