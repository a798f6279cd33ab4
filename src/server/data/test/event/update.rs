use super::*;

/// Tests the create → partial update → read round trip for events.
///
/// Only the date and location are patched; title, description and image
/// must keep their stored values.
#[tokio::test]
async fn patch_preserves_unsupplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let new_date = NaiveDate::from_ymd_opt(2026, 9, 15).unwrap();

    let updated = repo
        .update(UpdateEventParams {
            id: event.id,
            destination_id: None,
            title: None,
            description: None,
            date: Some(new_date),
            location: Some("New venue".to_string()),
            image: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, event.title);
    assert_eq!(updated.description, event.description);
    assert_eq!(updated.date, new_date);
    assert_eq!(updated.location, "New venue");
    assert_eq!(updated.image, event.image);

    let (read_back, _) = repo.get_by_id(event.id).await?.unwrap();
    assert_eq!(read_back, updated);

    Ok(())
}

/// Tests clearing the event image with an explicit null patch.
#[tokio::test]
async fn explicit_null_clears_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, destination) = factory::helpers::create_destination_with_category(db).await?;
    let event = factory::event::create_event(db, destination.id).await?;

    let repo = EventRepository::new(db);

    // Give it an image, then clear it.
    repo.update(UpdateEventParams {
        id: event.id,
        destination_id: None,
        title: None,
        description: None,
        date: None,
        location: None,
        image: Some(Some("party.jpg".to_string())),
    })
    .await?;

    let cleared = repo
        .update(UpdateEventParams {
            id: event.id,
            destination_id: None,
            title: None,
            description: None,
            date: None,
            location: None,
            image: Some(None),
        })
        .await?
        .unwrap();

    assert_eq!(cleared.image, None);

    Ok(())
}
