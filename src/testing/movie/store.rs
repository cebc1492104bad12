use actix_web::http::{Method, StatusCode};
use actix_web::test::{TestRequest, call_service, read_body_json};

use crate::entities::movies;
use crate::requests::movie::MovieRequest;
use crate::responses::movie::Movie;

#[actix_web::test]
async fn store_creates_a_movie() {
    let (service, pool) = crate::service!();

    let payload = MovieRequest {
        title: "The Grand Escape".to_string(),
        director: "Maria Vega".to_string(),
        year: 2019,
        duration: 128,
        genre: "Drama".to_string(),
    };

    let request = TestRequest::default()
        .insert_header(("Content-Type", "application/json"))
        .uri("/v1/movies")
        .method(Method::POST)
        .set_payload(serde_json::to_string(&payload).unwrap())
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let movie: Movie = read_body_json(response).await;
    assert!(movie.id >= 1);
    assert_eq!(movie.title, "The Grand Escape");
    assert_eq!(movie.genre, "Drama");

    // The record really landed in the database.
    let id = movie.id;
    let stored = pool
        .execute(move |db| Box::pin(async move { movies::Model::find_by_id(db, id).await }))
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[actix_web::test]
async fn store_normalizes_genre_spelling() {
    let (service, _pool) = crate::service!();

    let payload = MovieRequest {
        title: "Starfall".to_string(),
        director: "J. Mendez".to_string(),
        year: 2021,
        duration: 95,
        genre: "science fiction".to_string(),
    };

    let request = TestRequest::default()
        .insert_header(("Content-Type", "application/json"))
        .uri("/v1/movies")
        .method(Method::POST)
        .set_payload(serde_json::to_string(&payload).unwrap())
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let movie: Movie = read_body_json(response).await;
    assert_eq!(movie.genre, "Science Fiction");
}

#[actix_web::test]
async fn store_rejects_invalid_payload() {
    let (service, pool) = crate::service!();

    let payload = MovieRequest {
        title: "".to_string(),
        director: "Maria Vega".to_string(),
        year: 1500,
        duration: 0,
        genre: "Drama".to_string(),
    };

    let request = TestRequest::default()
        .insert_header(("Content-Type", "application/json"))
        .uri("/v1/movies")
        .method(Method::POST)
        .set_payload(serde_json::to_string(&payload).unwrap())
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Nothing was written.
    let count = pool
        .execute(|db| Box::pin(async move { movies::Model::count_all(db).await }))
        .await
        .unwrap();
    assert_eq!(count, 0);
}
