use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body};

#[actix_web::test]
async fn liveness_always_reports_healthy() {
    let (service, _pool) = crate::service!();

    let request = TestRequest::get().uri("/health").to_request();
    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn database_health_reports_the_pool_status() {
    let (service, pool) = crate::service!();

    let request = TestRequest::get().uri("/health/db").to_request();
    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["pool"]["max_connections"], 1);
    assert_eq!(body["pool"]["active"], 0);

    // The probe checked a connection out and straight back in.
    assert!(pool.is_connected());
    assert_eq!(pool.status().active, 0);
}

#[actix_web::test]
#[serial_test::serial]
async fn metrics_endpoint_renders_prometheus_text() {
    let (service, _pool) = crate::service!();

    let request = TestRequest::get().uri("/metrics").to_request();
    let response = call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type").unwrap();
    assert_eq!(content_type, "text/plain; version=0.0.4");

    let body = read_body(response).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("database_pool_connections_total"));
}
