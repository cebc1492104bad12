use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};

use crate::database::DatabasePool;
use crate::responses::movie::MoviePaginationResponse;
use crate::testing::movie::seed_movie;

async fn seed_catalog(pool: &DatabasePool) {
    seed_movie(pool, "The Grand Escape", "Maria Vega", 2019, 128, "Drama").await;
    seed_movie(pool, "Starfall", "J. Mendez", 2021, 95, "Science Fiction").await;
    seed_movie(pool, "Midnight Run II", "Maria Vega", 1995, 102, "Action").await;
    seed_movie(pool, "Quiet Harbor", "Ann Chen", 2019, 88, "Drama").await;
}

#[actix_web::test]
async fn listing_returns_every_movie_ordered_by_title() {
    let (service, pool) = crate::service!();
    seed_catalog(&pool).await;

    let request = TestRequest::get().uri("/v1/movies").to_request();
    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: MoviePaginationResponse = read_body_json(response).await;
    assert_eq!(page.total, 4);
    assert_eq!(page.page, 1);
    assert_eq!(page.pages, 1);

    let titles: Vec<&str> = page.data.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Midnight Run II",
            "Quiet Harbor",
            "Starfall",
            "The Grand Escape"
        ]
    );
}

#[actix_web::test]
async fn search_matches_title_and_director() {
    let (service, pool) = crate::service!();
    seed_catalog(&pool).await;

    let request = TestRequest::get()
        .uri("/v1/movies?search=vega")
        .to_request();
    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: MoviePaginationResponse = read_body_json(response).await;
    assert_eq!(page.total, 2);
    assert!(page.data.iter().all(|m| m.director == "Maria Vega"));
}

#[actix_web::test]
async fn genre_filter_is_exact() {
    let (service, pool) = crate::service!();
    seed_catalog(&pool).await;

    let request = TestRequest::get().uri("/v1/movies?genre=Drama").to_request();
    let response = call_service(&service, request).await;

    let page: MoviePaginationResponse = read_body_json(response).await;
    assert_eq!(page.total, 2);
    assert!(page.data.iter().all(|m| m.genre == "Drama"));
}

#[actix_web::test]
async fn year_range_filter_is_inclusive() {
    let (service, pool) = crate::service!();
    seed_catalog(&pool).await;

    let request = TestRequest::get()
        .uri("/v1/movies?year_from=2019&year_to=2021")
        .to_request();
    let response = call_service(&service, request).await;

    let page: MoviePaginationResponse = read_body_json(response).await;
    assert_eq!(page.total, 3);
    assert!(page.data.iter().all(|m| (2019..=2021).contains(&m.year)));
}

#[actix_web::test]
async fn exact_year_filter() {
    let (service, pool) = crate::service!();
    seed_catalog(&pool).await;

    let request = TestRequest::get().uri("/v1/movies?year=1995").to_request();
    let response = call_service(&service, request).await;

    let page: MoviePaginationResponse = read_body_json(response).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "Midnight Run II");
}

#[actix_web::test]
async fn page_size_splits_the_listing() {
    let (service, pool) = crate::service!();
    seed_catalog(&pool).await;

    let request = TestRequest::get()
        .uri("/v1/movies?per_page=3&page=2")
        .to_request();
    let response = call_service(&service, request).await;

    let page: MoviePaginationResponse = read_body_json(response).await;
    assert_eq!(page.total, 4);
    assert_eq!(page.pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.data.len(), 1);
}

#[actix_web::test]
async fn descending_year_order() {
    let (service, pool) = crate::service!();
    seed_catalog(&pool).await;

    let request = TestRequest::get()
        .uri("/v1/movies?order=year&sort=desc")
        .to_request();
    let response = call_service(&service, request).await;

    let page: MoviePaginationResponse = read_body_json(response).await;
    let years: Vec<i32> = page.data.iter().map(|m| m.year).collect();
    assert_eq!(years, vec![2021, 2019, 2019, 1995]);
}
