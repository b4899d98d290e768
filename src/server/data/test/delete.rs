use super::*;

/// Tests deleting a record returns its prior value and removes it.
///
/// Expected: Ok(Some) with the deleted event, then an empty table
#[tokio::test]
async fn deletes_and_returns_prior_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .requirements("Level 40")
        .build()
        .await?;

    let repo = ResourceRepository::<Event>::new(db);
    let result = repo.delete(event.id).await?;

    assert_eq!(result, Some(event.clone()));

    let stored = entity::prelude::Event::find_by_id(event.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that a second delete of the same identity reports absence.
///
/// Expected: Ok(Some) then Ok(None)
#[tokio::test]
async fn second_delete_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::create_news(db).await?;

    let repo = ResourceRepository::<News>::new(db);
    assert!(repo.delete(news.id).await?.is_some());
    assert!(repo.delete(news.id).await?.is_none());

    Ok(())
}

/// Tests that deleting one record leaves the others in place.
///
/// Expected: Ok with only the other club remaining
#[tokio::test]
async fn leaves_other_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Club)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_club(db).await?;
    let kept = factory::create_club(db).await?;

    let repo = ResourceRepository::<Club>::new(db);
    repo.delete(doomed.id).await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining, vec![kept]);

    Ok(())
}
