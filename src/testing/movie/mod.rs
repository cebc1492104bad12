mod delete;
mod pagination;
mod show;
mod store;
mod update;

use chrono::Utc;

use crate::database::DatabasePool;
use crate::entities::movies;

/// Insert one movie directly through the pool, bypassing the HTTP surface
pub(crate) async fn seed_movie(
    pool: &DatabasePool,
    title: &str,
    director: &str,
    year: i32,
    duration: i32,
    genre: &str,
) -> movies::Model {
    let now = Utc::now();
    let model = movies::Model {
        id: 0,
        title: title.to_string(),
        director: director.to_string(),
        year,
        duration,
        genre: genre.to_string(),
        created_at: now,
        updated_at: now,
    };

    pool.execute(move |db| Box::pin(async move { model.store(db).await }))
        .await
        .unwrap()
}
