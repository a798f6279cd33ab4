use sea_orm::DatabaseConnection;

use crate::server::{
    data::banner::BannerRepository,
    error::AppError,
    model::banner::{CreateBannerParams, UpdateBannerParams},
};

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBannerParams) -> Result<entity::banner::Model, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::Validation("Banner title is required".to_string()));
        }
        if params.image.trim().is_empty() {
            return Err(AppError::Validation("Banner image is required".to_string()));
        }

        Ok(BannerRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(
        &self,
        active: Option<bool>,
    ) -> Result<Vec<entity::banner::Model>, AppError> {
        Ok(BannerRepository::new(self.db).get_all(active).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::banner::Model>, AppError> {
        Ok(BannerRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        params: UpdateBannerParams,
    ) -> Result<Option<entity::banner::Model>, AppError> {
        Ok(BannerRepository::new(self.db).update(params).await?)
    }

    /// Soft delete: the row survives with its active flag cleared.
    pub async fn deactivate(&self, id: i32) -> Result<entity::banner::Model, AppError> {
        BannerRepository::new(self.db)
            .deactivate(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Banner not found".to_string()))
    }
}
