mod common;

use axum_test::TestServer;
use url_redirector::routes::app_router;

use common::TestStore;

#[tokio::test]
async fn test_health_endpoint_success() {
    let store = TestStore::new();

    let server = TestServer::new(app_router(store.state())).unwrap();
    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_missing_bucket() {
    let store = TestStore::new();

    let server = TestServer::new(app_router(store.state_for_bucket("absent"))).unwrap();
    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}
