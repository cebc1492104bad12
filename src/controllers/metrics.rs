use actix_web::{HttpResponse, Responder, get, web};

use crate::database::DatabasePool;
use crate::metrics::AppMetrics;

/// Metrics endpoint for Prometheus scraping
///
/// Returns metrics in Prometheus text format
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Metrics",
    responses(
        (status = 200, description = "Prometheus text format metrics", body = String),
    )
)]
#[get("/metrics")]
pub async fn metrics(
    metrics: web::Data<AppMetrics>,
    pool: web::Data<DatabasePool>,
) -> impl Responder {
    // Refresh the pool gauges right before rendering
    metrics.set_pool_status(&pool.status());

    let output = metrics.render();

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(output)
}
