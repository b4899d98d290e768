use super::*;

/// Tests creating a news post and reading it back from the list.
///
/// Verifies that the created row carries a store-assigned identity and that the
/// listed record equals the supplied fields plus that identity.
///
/// Expected: Ok with exactly one listed record matching the created one
#[tokio::test]
async fn created_news_appears_in_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<News>::new(db);
    let created = repo
        .create(NewsFields {
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 1)),
            description: Some(Some("patch notes".to_string())),
        })
        .await?;

    assert!(created.id > 0);

    let listed = repo.get_all().await?;
    let matching: Vec<_> = listed.iter().filter(|n| n.id == created.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0], &created);
    assert_eq!(matching[0].date, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(matching[0].description.as_deref(), Some("patch notes"));

    Ok(())
}

/// Tests that absent fields are stored as NULL on create.
///
/// Expected: Ok with every unsupplied spell column empty
#[tokio::test]
async fn stores_absent_fields_as_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Spell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<Spell>::new(db);
    let created = repo
        .create(SpellFields {
            name: Some(Some("Fireball".to_string())),
            ..Default::default()
        })
        .await?;

    let stored = entity::prelude::Spell::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name.as_deref(), Some("Fireball"));
    assert_eq!(stored.description, None);
    assert_eq!(stored.farm, None);

    Ok(())
}

/// Tests that an entirely empty field set still creates a record.
///
/// Expected: Ok with a new identity and no field values
#[tokio::test]
async fn creates_event_with_no_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<Event>::new(db);
    let created = repo.create(EventFields::default()).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, None);
    assert_eq!(created.event_type, None);
    assert_eq!(created.requirements, None);

    Ok(())
}

/// Tests that identities are unique across creates.
///
/// Expected: Ok with two distinct identities
#[tokio::test]
async fn assigns_distinct_identities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<Club>::new(db);
    let first = repo.create(ClubFields::default()).await?;
    let second = repo.create(ClubFields::default()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
