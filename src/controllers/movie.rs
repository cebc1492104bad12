use actix_web::web::{Data, Json, Path, Query};
use actix_web::{Responder, delete, get, post, put};

use crate::database::DatabasePool;
use crate::helpers::AnyhowResponder;
use crate::requests::movie::MovieRequest;
use crate::responses::movie::{
    Movie, MovieDeleted, MoviePaginationRequest, MoviePaginationResponse,
};
use crate::services;

/// Paginate movies
///
/// Supports free-text search over title and director, plus genre, exact
/// year and year-range filters
#[utoipa::path(
    tag = "Movie",
    params(MoviePaginationRequest),
    responses(
        (status = 200, description = "One page of the catalog", body = MoviePaginationResponse),
        (status = 500, description = "Database unavailable"),
    )
)]
#[get("/v1/movies")]
pub async fn paginate(
    pool: Data<DatabasePool>,
    Query(request): Query<MoviePaginationRequest>,
) -> impl Responder {
    AnyhowResponder(services::movie::paginate::paginate(&pool, request).await)
}

/// Store new movie
///
/// Fails if any catalog validation rule is violated
#[utoipa::path(
    tag = "Movie",
    responses(
        (status = 200, description = "Stored movie", body = Movie),
        (status = 500, description = "Validation or database failure"),
    )
)]
#[post("/v1/movies")]
pub async fn store(pool: Data<DatabasePool>, Json(request): Json<MovieRequest>) -> impl Responder {
    AnyhowResponder(services::movie::store::store(&pool, request).await)
}

/// Show movie by id
///
/// Fails if the movie does not exist
#[utoipa::path(
    tag = "Movie",
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 500, description = "Not found or database failure"),
    )
)]
#[get("/v1/movies/{id}")]
pub async fn show(pool: Data<DatabasePool>, id: Path<i32>) -> impl Responder {
    AnyhowResponder(services::movie::show::show(&pool, id.into_inner()).await)
}

/// Update movie by id
///
/// Fails if the movie does not exist or a validation rule is violated
#[utoipa::path(
    tag = "Movie",
    responses(
        (status = 200, description = "Updated movie", body = Movie),
        (status = 500, description = "Not found, validation or database failure"),
    )
)]
#[put("/v1/movies/{id}")]
pub async fn update(
    pool: Data<DatabasePool>,
    id: Path<i32>,
    Json(request): Json<MovieRequest>,
) -> impl Responder {
    AnyhowResponder(services::movie::update::update(&pool, id.into_inner(), request).await)
}

/// Delete movie by id
///
/// Fails if the movie does not exist
#[utoipa::path(
    tag = "Movie",
    responses(
        (status = 200, description = "Deletion acknowledgement", body = MovieDeleted),
        (status = 500, description = "Not found or database failure"),
    )
)]
#[delete("/v1/movies/{id}")]
pub async fn delete(pool: Data<DatabasePool>, id: Path<i32>) -> impl Responder {
    AnyhowResponder(services::movie::delete::delete(&pool, id.into_inner()).await)
}
