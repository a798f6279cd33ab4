use sea_orm::DatabaseConnection;

use crate::server::{
    data::{destination::DestinationRepository, favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves a destination for a user. The destination must exist and carry
    /// a usable slug (favorites link back through `/destinations/slug/…`);
    /// one favorite per (user, destination) pair.
    pub async fn create(
        &self,
        user_id: i32,
        destination_id: i32,
    ) -> Result<entity::favorite::Model, AppError> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let Some((destination, _)) = DestinationRepository::new(self.db)
            .get_by_id(destination_id)
            .await?
        else {
            return Err(AppError::NotFound("Destination not found".to_string()));
        };
        if destination.slug.is_empty() {
            return Err(AppError::Validation(
                "Destination has no slug and cannot be favorited".to_string(),
            ));
        }

        let repo = FavoriteRepository::new(self.db);

        if repo.pair_exists(user_id, destination_id).await? {
            return Err(AppError::Conflict(
                "Destination is already in this user's favorites".to_string(),
            ));
        }

        Ok(repo.create(user_id, destination_id).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::favorite::Model, Option<entity::destination::Model>)>, AppError> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(FavoriteRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_destination(
        &self,
        destination_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, AppError> {
        if DestinationRepository::new(self.db)
            .get_by_id(destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        Ok(FavoriteRepository::new(self.db)
            .get_by_destination(destination_id)
            .await?)
    }
}
