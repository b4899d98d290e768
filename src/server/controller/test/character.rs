use super::*;

/// Tests that tags and counts survive a create and fetch.
///
/// Expected: 201 on create, 200 on fetch with identical tags and counts
#[tokio::test]
async fn tags_round_trip() {
    let (_test, app) = test_app().await;

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/character",
        Some(json!({
            "name": "Athena",
            "tags": ["support", "healer"],
            "leader": true,
            "stars": 5,
            "gearTier": 3,
            "upgradeStones": 120
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = send_json(
        &app,
        Method::GET,
        &format!("/character/{}", created["id"]),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["tags"], json!(["support", "healer"]));
    assert_eq!(fetched["leader"], true);
    assert_eq!(fetched["gearTier"], 3);
    assert_eq!(fetched["upgradeStones"], 120);
    assert_eq!(fetched["passive1"], Value::Null);
}

/// Tests that a count too large for the store column is rejected.
///
/// Expected: 400 naming the field
#[tokio::test]
async fn oversized_count_returns_bad_request() {
    let (_test, app) = test_app().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/character",
        Some(json!({"upgradeStones": 3_000_000_000u64})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("upgradeStones"));
}

/// Tests that a character created without tags reports an empty list.
///
/// Expected: 201 with `tags: []`
#[tokio::test]
async fn missing_tags_serialize_as_empty_list() {
    let (_test, app) = test_app().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/character",
        Some(json!({"name": "Hermes"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["tags"], json!([]));
}
