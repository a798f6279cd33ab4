use super::*;

/// Tests user creation defaults and email lookup.
#[tokio::test]
async fn creates_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParams {
            full_name: "Ana Castillo".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            role: entity::user::Role::User,
        })
        .await?;

    let found = repo.find_by_email("ana@example.com").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, entity::user::Role::User);

    assert!(repo.email_exists("ana@example.com", None).await?);
    assert!(!repo.email_exists("ana@example.com", Some(created.id)).await?);

    Ok(())
}

/// Tests admin detection across roles.
#[tokio::test]
async fn admin_exists_only_with_admin_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    UserFactory::new(db).build().await?;
    assert!(!repo.admin_exists().await?);

    UserFactory::new(db)
        .role(entity::user::Role::Admin)
        .build()
        .await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests that a password patch overwrites while other fields persist.
#[tokio::test]
async fn patch_updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).password("old-secret").build().await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id,
            full_name: None,
            email: None,
            password: Some("new-secret".to_string()),
            role: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.password, "new-secret");
    assert_eq!(updated.full_name, user.full_name);
    assert_eq!(updated.email, user.email);

    Ok(())
}
