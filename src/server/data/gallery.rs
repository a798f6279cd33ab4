use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct GalleryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one gallery row per stored filename.
    pub async fn create_many(
        &self,
        destination_id: i32,
        images: Vec<String>,
    ) -> Result<Vec<entity::gallery_image::Model>, DbErr> {
        let mut created = Vec::with_capacity(images.len());

        for image in images {
            let row = entity::gallery_image::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                image: ActiveValue::Set(image),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(row);
        }

        Ok(created)
    }

    pub async fn get_by_destination(
        &self,
        destination_id: i32,
    ) -> Result<Vec<entity::gallery_image::Model>, DbErr> {
        entity::prelude::GalleryImage::find()
            .filter(entity::gallery_image::Column::DestinationId.eq(destination_id))
            .order_by_asc(entity::gallery_image::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::gallery_image::Model>, DbErr> {
        entity::prelude::GalleryImage::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::GalleryImage::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }
}
