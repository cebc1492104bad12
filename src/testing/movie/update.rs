use actix_web::http::{Method, StatusCode};
use actix_web::test::{TestRequest, call_service, read_body_json};

use crate::requests::movie::MovieRequest;
use crate::responses::movie::Movie;
use crate::testing::movie::seed_movie;

#[actix_web::test]
async fn update_changes_the_fields() {
    let (service, pool) = crate::service!();

    let seeded = seed_movie(&pool, "Working Title", "Maria Vega", 2018, 110, "Drama").await;

    let payload = MovieRequest {
        title: "The Grand Escape".to_string(),
        director: "Maria Vega".to_string(),
        year: 2019,
        duration: 128,
        genre: "Adventure".to_string(),
    };

    let request = TestRequest::default()
        .insert_header(("Content-Type", "application/json"))
        .uri(&format!("/v1/movies/{}", seeded.id))
        .method(Method::PUT)
        .set_payload(serde_json::to_string(&payload).unwrap())
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let movie: Movie = read_body_json(response).await;
    assert_eq!(movie.id, seeded.id);
    assert_eq!(movie.title, "The Grand Escape");
    assert_eq!(movie.year, 2019);
    assert_eq!(movie.duration, 128);
    assert_eq!(movie.genre, "Adventure");
}

#[actix_web::test]
async fn update_unknown_id_fails() {
    let (service, _pool) = crate::service!();

    let payload = MovieRequest {
        title: "The Grand Escape".to_string(),
        director: "Maria Vega".to_string(),
        year: 2019,
        duration: 128,
        genre: "Drama".to_string(),
    };

    let request = TestRequest::default()
        .insert_header(("Content-Type", "application/json"))
        .uri("/v1/movies/9999")
        .method(Method::PUT)
        .set_payload(serde_json::to_string(&payload).unwrap())
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn update_rejects_invalid_payload() {
    let (service, pool) = crate::service!();

    let seeded = seed_movie(&pool, "Working Title", "Maria Vega", 2018, 110, "Drama").await;

    let payload = MovieRequest {
        title: "x".repeat(200),
        director: "Maria Vega".to_string(),
        year: 2019,
        duration: 128,
        genre: "Drama".to_string(),
    };

    let request = TestRequest::default()
        .insert_header(("Content-Type", "application/json"))
        .uri(&format!("/v1/movies/{}", seeded.id))
        .method(Method::PUT)
        .set_payload(serde_json::to_string(&payload).unwrap())
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
