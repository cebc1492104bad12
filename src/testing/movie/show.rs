use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};

use crate::responses::movie::Movie;
use crate::testing::movie::seed_movie;

#[actix_web::test]
async fn show_returns_the_movie() {
    let (service, pool) = crate::service!();

    let seeded = seed_movie(&pool, "The Grand Escape", "Maria Vega", 2019, 128, "Drama").await;

    let request = TestRequest::get()
        .uri(&format!("/v1/movies/{}", seeded.id))
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let movie: Movie = read_body_json(response).await;
    assert_eq!(movie.id, seeded.id);
    assert_eq!(movie.title, "The Grand Escape");
    assert_eq!(movie.director, "Maria Vega");
    assert_eq!(movie.year, 2019);
    assert_eq!(movie.duration, 128);
}

#[actix_web::test]
async fn show_unknown_id_fails() {
    let (service, _pool) = crate::service!();

    let request = TestRequest::get().uri("/v1/movies/9999").to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
