use crate::model::gallery::GalleryImageDto;

impl From<entity::gallery_image::Model> for GalleryImageDto {
    fn from(model: entity::gallery_image::Model) -> Self {
        Self {
            id: model.id,
            destination_id: model.destination_id,
            image: model.image,
        }
    }
}
