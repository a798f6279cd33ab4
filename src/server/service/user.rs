use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::credential::CredentialVerifier,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    verifier: &'a dyn CredentialVerifier,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, verifier: &'a dyn CredentialVerifier) -> Self {
        Self { db, verifier }
    }

    /// Creates a user. Emails are unique; the credential goes through the
    /// configured verifier before storage.
    pub async fn create(&self, dto: CreateUserDto) -> Result<entity::user::Model, AppError> {
        if dto.full_name.trim().is_empty() {
            return Err(AppError::Validation("Full name is required".to_string()));
        }
        if !dto.email.contains('@') {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid email address",
                dto.email
            )));
        }
        if dto.password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo.email_exists(&dto.email, None).await? {
            return Err(AppError::Conflict(format!(
                "A user with email '{}' already exists",
                dto.email
            )));
        }

        let params = CreateUserParams {
            full_name: dto.full_name,
            email: dto.email,
            password: self.verifier.prepare(&dto.password),
            role: dto.role.map(Into::into).unwrap_or(entity::user::Role::User),
        };

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, AppError> {
        Ok(UserRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateUserDto,
    ) -> Result<Option<entity::user::Model>, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(email) = &dto.email {
            if !email.contains('@') {
                return Err(AppError::Validation(format!(
                    "'{email}' is not a valid email address"
                )));
            }
            if repo.email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "A user with email '{email}' already exists"
                )));
            }
        }

        let params = UpdateUserParams {
            id,
            full_name: dto.full_name,
            email: dto.email,
            password: dto.password.map(|raw| self.verifier.prepare(&raw)),
            role: dto.role.map(Into::into),
        };

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
