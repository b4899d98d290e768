use super::*;

/// Tests the root route returns the plain-text greeting.
///
/// Expected: 200 with body "hello world"
#[tokio::test]
async fn returns_greeting() {
    let (_test, app) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "hello world");
}

/// Tests the OpenAPI document lists the collection routes.
///
/// Expected: 200 with `/news` and `/club/{id}` paths present
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = test_app().await;

    let (status, doc) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/news"].is_object());
    assert!(doc["paths"]["/club/{id}"].is_object());
}

/// Tests an unknown route falls through to the router's 404.
///
/// Expected: 404
#[tokio::test]
async fn unknown_route_returns_not_found() {
    let (_test, app) = test_app().await;

    let (status, _) = send(&app, Method::GET, "/weapons", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
