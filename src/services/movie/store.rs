use anyhow::Context;
use chrono::Utc;

use crate::database::DatabasePool;
use crate::entities::movies;
use crate::requests::movie::MovieRequest;
use crate::responses::movie::Movie;
use crate::validation::Validator;

#[tracing::instrument(skip(pool, request), fields(title = %request.title))]
pub async fn store(pool: &DatabasePool, request: MovieRequest) -> anyhow::Result<Movie> {
    if let Err(errors) = request.validate() {
        anyhow::bail!("Validation failed: {}", errors.join(", "));
    }

    let now = Utc::now();
    let movie = movies::Model {
        id: 0,
        title: request.title.trim().to_string(),
        director: request.director.trim().to_string(),
        year: request.year,
        duration: request.duration,
        genre: Validator::canonical_genre(&request.genre)
            .unwrap_or(request.genre.trim())
            .to_string(),
        created_at: now,
        updated_at: now,
    };

    let movie = pool
        .execute(move |db| Box::pin(async move { movie.store(db).await }))
        .await
        .context("Failed to store movie to database")?;

    tracing::info!(id = movie.id, "movie stored");

    Ok(movie.into())
}
