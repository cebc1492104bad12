use anyhow::Context;

use crate::database::DatabasePool;
use crate::entities::movies;
use crate::responses::movie::Movie;

#[tracing::instrument(skip(pool))]
pub async fn show(pool: &DatabasePool, id: i32) -> anyhow::Result<Movie> {
    let movie = pool
        .execute(move |db| Box::pin(async move { movies::Model::find_by_id(db, id).await }))
        .await
        .context("Failed to fetch movie from database")?
        .with_context(|| format!("Movie {} not found", id))?;

    Ok(movie.into())
}
