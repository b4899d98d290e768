use super::*;

/// Tests that updating an unknown club reports 404 instead of a silent success.
///
/// Expected: 404 with an error body naming the club
#[tokio::test]
async fn update_unknown_club_returns_not_found() {
    let (_test, app) = test_app().await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/club/999",
        Some(json!({"name": "Ghost Club"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Club 999 not found"}));
}

/// Tests that an update changes only the supplied fields.
///
/// Expected: 200 with the new tier and every other field unchanged
#[tokio::test]
async fn updates_only_supplied_fields() {
    let (test, app) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .name("Olympians")
        .members(30)
        .alliance("North")
        .build()
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/club/{}", club.id),
        Some(json!({"siegeOfOlympusTier": "S"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["siegeOfOlympusTier"], "S");
    assert_eq!(body["clubExpeditionTier"], "C");
    assert_eq!(body["name"], "Olympians");
    assert_eq!(body["members"], 30);
    assert_eq!(body["alliance"], "North");
}

/// Tests that a tier outside the known ranks is rejected.
///
/// Expected: 422
#[tokio::test]
async fn rejects_unknown_tier() {
    let (_test, app) = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/club",
        Some(r#"{"clubExpeditionTier":"Z"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests that a negative member count is rejected.
///
/// Expected: 422
#[tokio::test]
async fn rejects_negative_members() {
    let (_test, app) = test_app().await;

    let (status, _) = send(&app, Method::POST, "/club", Some(r#"{"members":-3}"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
