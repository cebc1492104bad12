use actix_web::http::{Method, StatusCode};
use actix_web::test::{TestRequest, call_service, read_body_json};

use crate::entities::movies;
use crate::responses::movie::MovieDeleted;
use crate::testing::movie::seed_movie;

#[actix_web::test]
async fn delete_removes_the_movie() {
    let (service, pool) = crate::service!();

    let seeded = seed_movie(&pool, "The Grand Escape", "Maria Vega", 2019, 128, "Drama").await;

    let request = TestRequest::default()
        .uri(&format!("/v1/movies/{}", seeded.id))
        .method(Method::DELETE)
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let deleted: MovieDeleted = read_body_json(response).await;
    assert_eq!(deleted.id, seeded.id);

    let id = seeded.id;
    let gone = pool
        .execute(move |db| Box::pin(async move { movies::Model::find_by_id(db, id).await }))
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[actix_web::test]
async fn delete_unknown_id_fails() {
    let (service, _pool) = crate::service!();

    let request = TestRequest::default()
        .uri("/v1/movies/9999")
        .method(Method::DELETE)
        .to_request();

    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
