use std::time::Duration;

use sea_orm::DbErr;

use crate::config::PoolConfig;
use crate::database::{DatabaseManager, DatabasePool};

/// In-memory database pool with the schema applied, for tests
///
/// Sized to a single connection: every sqlite `:memory:` session is its own
/// database, so with one pooled handle all operations see the same schema.
pub async fn database_pool() -> Result<DatabasePool, DbErr> {
    let manager = DatabaseManager::new("sqlite::memory:", Duration::from_secs(5));
    let config = PoolConfig {
        max_connections: 1,
        acquire_timeout_ms: 5_000,
    };

    let pool = DatabasePool::new(manager, &config);

    pool.execute(|db| {
        Box::pin(async move {
            use cine_magenta_migration::MigratorTrait;

            cine_magenta_migration::Migrator::up(db, None).await
        })
    })
    .await
    .map_err(|e| DbErr::Custom(e.to_string()))?;

    Ok(pool)
}


#[macro_export]
macro_rules! service {
    () => {{
        let pool = crate::testing::instance::database_pool().await.unwrap();
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(pool.clone()))
            .configure(crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, pool)
    }};
}
