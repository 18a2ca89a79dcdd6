use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tarecruit::server::router::routes;
use tarecruit_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{app_state, body_json};

/// Expect the OpenAPI document to list the workflow routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_workflow_tables().build().await?;
    let app = routes().with_state(app_state(&test));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/api/ta/apply"]["post"].is_object());
    assert!(doc["paths"]["/lecturer/applications/{application_id}/accept"]["patch"].is_object());
    assert!(doc["paths"]["/api/admin/modules/{module_id}/close"]["patch"].is_object());
    assert!(doc["paths"]["/api/admin/recruitment-series/{series_id}/archive"]["patch"].is_object());

    Ok(())
}

/// Expect query parameters to route through to the listing handler
#[tokio::test]
async fn routes_requests_listing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_workflow_tables().build().await?;
    let app = routes().with_state(app_state(&test));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/ta/requests?userId=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
