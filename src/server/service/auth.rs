use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::credential::CredentialVerifier,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    verifier: &'a dyn CredentialVerifier,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, verifier: &'a dyn CredentialVerifier) -> Self {
        Self { db, verifier }
    }

    /// Verifies an email/password pair. Unknown email and wrong password
    /// fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<entity::user::Model, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.verifier.verify(password, &user.password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
