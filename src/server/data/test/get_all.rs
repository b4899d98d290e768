use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_list_when_no_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<Character>::new(db);
    let result = repo.get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that records are listed in identity order.
///
/// Expected: Ok with events ordered by ascending id
#[tokio::test]
async fn lists_records_in_identity_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;
    let third = factory::create_event(db).await?;

    let repo = ResourceRepository::<Event>::new(db);
    let result = repo.get_all().await?;

    let ids: Vec<i32> = result.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
