use sea_orm::DatabaseConnection;

use crate::server::{
    data::{destination::DestinationRepository, gallery::GalleryRepository},
    error::AppError,
};

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches already-stored upload filenames to a destination's gallery.
    pub async fn add_images(
        &self,
        destination_id: i32,
        images: Vec<String>,
    ) -> Result<Vec<entity::gallery_image::Model>, AppError> {
        if images.is_empty() {
            return Err(AppError::Validation(
                "At least one image is required".to_string(),
            ));
        }

        if DestinationRepository::new(self.db)
            .get_by_id(destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        Ok(GalleryRepository::new(self.db)
            .create_many(destination_id, images)
            .await?)
    }

    pub async fn get_by_destination(
        &self,
        destination_id: i32,
    ) -> Result<Vec<entity::gallery_image::Model>, AppError> {
        if DestinationRepository::new(self.db)
            .get_by_id(destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        Ok(GalleryRepository::new(self.db)
            .get_by_destination(destination_id)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GalleryRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Gallery image not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
