use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use cine_magenta::config;
use cine_magenta::database::{DatabaseManager, DatabasePool};
use cine_magenta::router;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = config::load().map_err(std::io::Error::other)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level)),
        )
        .init();

    tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "starting catalog service"
    );

    // One pool for the whole process, injected into every handler.
    let manager = DatabaseManager::from_config(&config.database);
    let pool = DatabasePool::new(manager, &config.pool);

    if pool.test_connection().await {
        tracing::info!(status = %pool.status(), "database reachable");
    } else {
        tracing::warn!(
            "database is not reachable at startup; operations will fail until it comes back"
        );
    }

    let bind = (config.server.host.clone(), config.server.port);
    let workers = config.server.workers;
    let shared_pool = pool.clone();

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(shared_pool.clone()))
            .configure(router::route)
    })
    .bind(bind)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await?;

    // Drain the idle pool on the way out.
    pool.close_all().await;

    Ok(())
}
