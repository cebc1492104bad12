use std::sync::{Arc, OnceLock};

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::database::PoolStatus;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Record one database query against the global recorder
///
/// Callable from anywhere in the data-access layer; a no-op until the
/// Prometheus recorder is installed by [`AppMetrics::new`].
pub fn record_db_query(operation: &str, duration_secs: f64) {
    counter!("database_queries_total", "operation" => operation.to_string()).increment(1);
    histogram!("database_queries_duration_seconds", "operation" => operation.to_string())
        .record(duration_secs);
}

/// Owns the Prometheus recorder and renders the scrape output
#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    pub fn new() -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            let builder = PrometheusBuilder::new()
                .set_buckets_for_metric(
                    Matcher::Full("database_queries_duration_seconds".to_string()),
                    &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0],
                )
                .expect("Failed to set buckets for database_queries_duration_seconds");

            Self::describe_metrics();

            builder
                .install_recorder()
                .expect("Failed to install Prometheus recorder")
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn describe_metrics() {
        // Database metrics
        describe_counter!("database_queries_total", "Total number of database queries");
        describe_histogram!(
            "database_queries_duration_seconds",
            "Database query duration in seconds"
        );

        // Connection pool metrics
        describe_gauge!(
            "database_pool_connections_active",
            "Connections currently checked out of the pool"
        );
        describe_gauge!(
            "database_pool_connections_idle",
            "Idle connections waiting in the pool"
        );
        describe_gauge!(
            "database_pool_connections_total",
            "Connections currently alive"
        );
    }

    /// Publish a pool status snapshot as gauges
    pub fn set_pool_status(&self, status: &PoolStatus) {
        gauge!("database_pool_connections_active").set(f64::from(status.active));
        gauge!("database_pool_connections_idle").set(f64::from(status.available));
        gauge!("database_pool_connections_total").set(f64::from(status.total));
    }

    // Prometheus export
    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}
