use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

/// Resolves the session user and checks required permissions before a
/// handler runs its service call.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let repo = UserRepository::new(self.db);
        let Some(user) = repo.get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != entity::user::Role::Admin {
                        return Err(AuthError::AccessDenied(user_id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
