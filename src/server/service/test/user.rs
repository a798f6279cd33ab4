use super::*;

use crate::{
    model::user::{CreateUserDto, RoleDto},
    server::service::{
        auth::AuthService,
        credential::PlainTextVerifier,
        user::UserService,
    },
};

fn register_dto(email: &str) -> CreateUserDto {
    CreateUserDto {
        full_name: "Marta Ruiz".to_string(),
        email: email.to_string(),
        password: "hunter2".to_string(),
        role: None,
    }
}

/// Tests that duplicate emails are rejected with a conflict.
#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let verifier = PlainTextVerifier;
    let service = UserService::new(db, &verifier);

    service.create(register_dto("marta@example.com")).await.unwrap();

    let duplicate = service.create(register_dto("marta@example.com")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

/// Tests role defaulting and explicit role assignment.
#[tokio::test]
async fn role_defaults_to_user() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let verifier = PlainTextVerifier;
    let service = UserService::new(db, &verifier);

    let regular = service.create(register_dto("a@example.com")).await.unwrap();
    assert_eq!(regular.role, entity::user::Role::User);

    let mut dto = register_dto("b@example.com");
    dto.role = Some(RoleDto::Admin);
    let admin = service.create(dto).await.unwrap();
    assert_eq!(admin.role, entity::user::Role::Admin);
}

/// Tests login through the credential verifier: the right password passes,
/// the wrong one and an unknown email fail identically.
#[tokio::test]
async fn login_goes_through_the_verifier() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let verifier = PlainTextVerifier;
    UserService::new(db, &verifier)
        .create(register_dto("marta@example.com"))
        .await
        .unwrap();

    let auth = AuthService::new(db, &verifier);

    let user = auth.login("marta@example.com", "hunter2").await.unwrap();
    assert_eq!(user.email, "marta@example.com");

    assert!(auth.login("marta@example.com", "wrong").await.is_err());
    assert!(auth.login("nobody@example.com", "hunter2").await.is_err());
}
