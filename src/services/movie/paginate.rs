use std::time::Instant;

use anyhow::Context;
use sea_orm::prelude::*;
use sea_orm::{Condition, QueryOrder, QuerySelect};

use crate::database::DatabasePool;
use crate::entities::movies::{Column, Entity};
use crate::metrics;
use crate::responses::movie::{MoviePaginationOrder, MoviePaginationRequest, MoviePaginationResponse};
use crate::validation::Validator;

#[tracing::instrument(skip(pool, request), fields(page = %request.page(), limit = %request.limit()))]
pub async fn paginate(
    pool: &DatabasePool,
    request: MoviePaginationRequest,
) -> anyhow::Result<MoviePaginationResponse> {
    tracing::info!("Fetching paginated movies");

    let page = request.page();
    let limit = request.limit();
    let offset = request.offset();
    let order = request.order();
    let sort: sea_orm::Order = request.sort().into();

    let search = request.search().map(|s| format!("%{}%", s));
    let genre = request
        .genre
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Validator::canonical_genre(s)
                .map(str::to_string)
                .unwrap_or_else(|| s.to_string())
        });
    let year = request.year;
    let year_from = request.year_from;
    let year_to = request.year_to;

    let start = Instant::now();
    let (total, data) = pool
        .execute(move |db| {
            Box::pin(async move {
                let mut query = Entity::find();

                if let Some(search) = search {
                    query = query.filter(
                        Condition::any()
                            .add(Column::Title.like(search.clone()))
                            .add(Column::Director.like(search)),
                    );
                }

                if let Some(genre) = genre {
                    query = query.filter(Column::Genre.eq(genre));
                }

                if let Some(year) = year {
                    query = query.filter(Column::Year.eq(year));
                }

                if let Some(from) = year_from {
                    query = query.filter(Column::Year.gte(from));
                }

                if let Some(to) = year_to {
                    query = query.filter(Column::Year.lte(to));
                }

                let total = query.clone().count(db).await?;

                let data = query
                    .limit(limit)
                    .offset(offset)
                    .order_by(
                        match order {
                            MoviePaginationOrder::Title => Column::Title,
                            MoviePaginationOrder::Director => Column::Director,
                            MoviePaginationOrder::Year => Column::Year,
                            MoviePaginationOrder::CreatedAt => Column::CreatedAt,
                        },
                        sort,
                    )
                    .all(db)
                    .await?;

                Ok((total, data))
            })
        })
        .await
        .context("Failed to fetch movies from database")?;
    metrics::record_db_query("movie_paginate", start.elapsed().as_secs_f64());

    tracing::info!(count = data.len(), total, "Movies fetched successfully");

    Ok(MoviePaginationResponse {
        total,
        page,
        pages: total.div_ceil(limit).max(1),
        data: data.iter().map(|movie| movie.into()).collect(),
    })
}
