use super::*;

/// Tests that a blank name is rejected with a validation error.
///
/// Expected: 400 naming the field
#[tokio::test]
async fn blank_name_returns_bad_request() {
    let (_test, app) = test_app().await;

    let (status, body) =
        send_json(&app, Method::POST, "/spells", Some(json!({"name": "  "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

/// Tests that a non-numeric id in the path is rejected.
///
/// Expected: 400
#[tokio::test]
async fn non_numeric_id_returns_bad_request() {
    let (_test, app) = test_app().await;

    let (status, _) = send(&app, Method::GET, "/spells/fireball", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests that a null field in an update clears it while absent fields stay put.
///
/// Expected: 200 with farm cleared, description replaced and name kept
#[tokio::test]
async fn null_field_clears_value() {
    let (test, app) = test_app().await;
    let db = test.db.as_ref().unwrap();

    let spell = factory::spell::SpellFactory::new(db)
        .name("Frost Nova")
        .farm("Chapter 3")
        .build()
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/spells/{}", spell.id),
        Some(json!({"farm": null, "description": "Freezes one enemy"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["farm"], Value::Null);
    assert_eq!(body["description"], "Freezes one enemy");
    assert_eq!(body["name"], "Frost Nova");
}

/// Tests that keys outside the spell schema are ignored on create.
///
/// Expected: 201 with the known fields stored and the extra key dropped
#[tokio::test]
async fn unknown_field_is_ignored() {
    let (_test, app) = test_app().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/spells",
        Some(json!({"name": "Bolt", "rarity": "epic"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Bolt");
    assert!(body.get("rarity").is_none());
}
