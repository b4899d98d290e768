use super::*;

/// Tests creating a news post over HTTP and listing it afterwards.
///
/// Verifies that the response echoes both fields with a store-assigned id and that a
/// subsequent list contains exactly that record.
///
/// Expected: 201 on create, 200 on list with the created record
#[tokio::test]
async fn creates_news_and_lists_it() {
    let (_test, app) = test_app().await;

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/news",
        Some(json!({"date": "2024-01-01", "description": "patch notes"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["date"], "2024-01-01");
    assert_eq!(created["description"], "patch notes");
    assert!(created["id"].as_i64().unwrap() > 0);

    let (status, listed) = send_json(&app, Method::GET, "/news", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

/// Tests that an explicit null on update clears the field and reports the cleared record.
///
/// Expected: 200 with description null and date kept, same state on a later GET
#[tokio::test]
async fn null_on_update_clears_description() {
    let (_test, app) = test_app().await;

    let (_, created) = send_json(
        &app,
        Method::POST,
        "/news",
        Some(json!({"date": "2024-01-01", "description": "patch notes"})),
    )
    .await;
    let uri = format!("/news/{}", created["id"]);

    let (status, updated) =
        send_json(&app, Method::PUT, &uri, Some(json!({"description": null}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(updated["date"], "2024-01-01");

    let (_, fetched) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched, updated);
}

/// Tests fetching a single news post by id.
///
/// Expected: 200 with the stored post
#[tokio::test]
async fn gets_news_by_id() {
    let (test, app) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let news = factory::news::NewsFactory::new(db)
        .description("Server maintenance")
        .build()
        .await
        .unwrap();

    let (status, body) = send_json(&app, Method::GET, &format!("/news/{}", news.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], news.id);
    assert_eq!(body["description"], "Server maintenance");
}

/// Tests that an invalid calendar date is rejected before reaching the store.
///
/// Expected: 422 with an error body
#[tokio::test]
async fn rejects_invalid_date() {
    let (_test, app) = test_app().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/news",
        Some(json!({"date": "2024-13-40"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

/// Tests that a body without a JSON content type is rejected.
///
/// Expected: 415
#[tokio::test]
async fn rejects_missing_content_type() {
    let (_test, app) = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/news")
        .body(Body::from(r#"{"description":"x"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
