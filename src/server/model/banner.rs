use crate::model::banner::{BannerDto, CreateBannerDto, UpdateBannerDto};

pub struct CreateBannerParams {
    pub image: String,
    pub title: String,
    pub sort_order: i32,
}

impl CreateBannerParams {
    pub fn from_dto(dto: CreateBannerDto) -> Self {
        Self {
            image: dto.image,
            title: dto.title,
            sort_order: dto.sort_order,
        }
    }
}

#[derive(Clone)]
pub struct UpdateBannerParams {
    pub id: i32,
    pub image: Option<String>,
    pub title: Option<String>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}

impl UpdateBannerParams {
    pub fn from_dto(id: i32, dto: UpdateBannerDto) -> Self {
        Self {
            id,
            image: dto.image,
            title: dto.title,
            sort_order: dto.sort_order,
            active: dto.active,
        }
    }
}

impl From<entity::banner::Model> for BannerDto {
    fn from(model: entity::banner::Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            title: model.title,
            sort_order: model.sort_order,
            active: model.active,
        }
    }
}
