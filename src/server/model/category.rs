use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

pub struct CreateCategoryParams {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            image: dto.image,
        }
    }
}

/// Patch for a category. `None` leaves the stored field untouched;
/// `image: Some(None)` clears the image.
#[derive(Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            image: dto.image,
        }
    }
}

impl From<entity::category::Model> for CategoryDto {
    fn from(model: entity::category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            image: model.image,
        }
    }
}
