use anyhow::Context;
use chrono::Utc;

use crate::database::DatabasePool;
use crate::entities::movies;
use crate::requests::movie::MovieRequest;
use crate::responses::movie::Movie;
use crate::validation::Validator;

#[tracing::instrument(skip(pool, request))]
pub async fn update(pool: &DatabasePool, id: i32, request: MovieRequest) -> anyhow::Result<Movie> {
    if let Err(errors) = request.validate() {
        anyhow::bail!("Validation failed: {}", errors.join(", "));
    }

    let now = Utc::now();
    let title = request.title.trim().to_string();
    let director = request.director.trim().to_string();
    let genre = Validator::canonical_genre(&request.genre)
        .unwrap_or(request.genre.trim())
        .to_string();
    let year = request.year;
    let duration = request.duration;

    let updated = pool
        .execute(move |db| {
            Box::pin(async move {
                let Some(existing) = movies::Model::find_by_id(db, id).await? else {
                    return Ok(None);
                };

                let model = movies::Model {
                    id,
                    title,
                    director,
                    year,
                    duration,
                    genre,
                    created_at: existing.created_at,
                    updated_at: now,
                };

                model.update(db).await.map(Some)
            })
        })
        .await
        .context("Failed to update movie in database")?
        .with_context(|| format!("Movie {} not found", id))?;

    tracing::info!(id, "movie updated");

    Ok(updated.into())
}
