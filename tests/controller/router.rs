//! Requests sent through the assembled router.

use axum::{body::Body, http::Request};
use recruit::server::router::routes;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::*;

fn app(test: &TestContext) -> axum::Router {
    routes()
        .with_state(test.app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn get(uri: &str) -> Result<Request<Body>, TestError> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| TestError::Other(Box::new(e)))
}

/// Expect the OpenAPI document to list the application endpoints
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json")?)
        .await
        .map_err(|e| TestError::Other(Box::new(e)))?;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await?;
    assert!(body["paths"]["/api/applications/{application_id}/{action}"].is_object());
    assert!(body["paths"]["/api/blacklist"].is_object());

    Ok(())
}

/// Expect protected routes to answer 401 without a logged in user
#[tokio::test]
async fn protected_route_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recruit_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/applications/mine")?)
        .await
        .map_err(|e| TestError::Other(Box::new(e)))?;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
