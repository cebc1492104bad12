use anyhow::Context;

use crate::database::DatabasePool;
use crate::entities::movies;
use crate::responses::movie::MovieDeleted;

#[tracing::instrument(skip(pool))]
pub async fn delete(pool: &DatabasePool, id: i32) -> anyhow::Result<MovieDeleted> {
    let deleted = pool
        .execute(move |db| {
            Box::pin(async move {
                let Some(existing) = movies::Model::find_by_id(db, id).await? else {
                    return Ok(false);
                };

                existing.delete(db).await?;
                Ok(true)
            })
        })
        .await
        .context("Failed to delete movie from database")?;

    if !deleted {
        anyhow::bail!("Movie {} not found", id);
    }

    tracing::info!(id, "movie deleted");

    Ok(MovieDeleted { id })
}
