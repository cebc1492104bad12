use sea_orm::prelude::*;
use sea_orm::{NotSet, PaginatorTrait};
use std::time::Instant;

use crate::entities::movies::{ActiveModel, Column, Entity, Model};
use crate::metrics;

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        let start = Instant::now();

        let result = match Entity::find_by_id(id).one(db).await {
            Ok(movie) => Ok(movie),
            Err(e) => {
                tracing::error!(id, error = %e, "failed to find movie by id");
                Err(e)
            }
        };

        metrics::record_db_query("movie_find_by_id", start.elapsed().as_secs_f64());

        result
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let start = Instant::now();

        let count = Entity::find()
            .filter(Column::Id.eq(id))
            .count(db)
            .await;

        metrics::record_db_query("movie_exists", start.elapsed().as_secs_f64());

        count.map(|n| n > 0)
    }

    pub async fn count_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let start = Instant::now();

        let result = Entity::find().count(db).await;

        metrics::record_db_query("movie_count", start.elapsed().as_secs_f64());

        result
    }

    pub async fn store(&self, db: &DatabaseConnection) -> Result<Model, DbErr> {
        let start = Instant::now();

        let mut model = ActiveModel::from(self.clone());
        // The database assigns the id.
        model.id = NotSet;

        let result = model.insert(db).await;

        metrics::record_db_query("movie_store", start.elapsed().as_secs_f64());

        result
    }

    pub async fn update(&self, db: &DatabaseConnection) -> Result<Model, DbErr> {
        let start = Instant::now();

        let result = ActiveModel::from(self.clone()).update(db).await;

        metrics::record_db_query("movie_update", start.elapsed().as_secs_f64());

        result
    }

    pub async fn delete(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let start = Instant::now();

        let result = Entity::delete_by_id(self.id).exec(db).await;

        metrics::record_db_query("movie_delete", start.elapsed().as_secs_f64());

        result?;
        Ok(())
    }
}
