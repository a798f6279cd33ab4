use crate::model::destination::{
    CreateDestinationDto, DestinationDto, DestinationFilterDto, UpdateDestinationDto,
};

pub struct CreateDestinationParams {
    pub name: String,
    /// Derived by the service (slugify + collision suffix), never taken
    /// from the request.
    pub slug: String,
    pub category_id: i32,
    pub summary: String,
    pub description: String,
    pub main_image: Option<String>,
    pub hero_image: Option<String>,
    pub featured: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CreateDestinationParams {
    pub fn from_dto(dto: CreateDestinationDto, slug: String) -> Self {
        Self {
            name: dto.name,
            slug,
            category_id: dto.category_id,
            summary: dto.summary,
            description: dto.description,
            main_image: dto.main_image,
            hero_image: dto.hero_image,
            featured: dto.featured,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

#[derive(Clone)]
pub struct UpdateDestinationParams {
    pub id: i32,
    pub name: Option<String>,
    pub category_id: Option<i32>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub main_image: Option<Option<String>>,
    pub hero_image: Option<Option<String>>,
    pub featured: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UpdateDestinationParams {
    pub fn from_dto(id: i32, dto: UpdateDestinationDto) -> Self {
        Self {
            id,
            name: dto.name,
            category_id: dto.category_id,
            summary: dto.summary,
            description: dto.description,
            main_image: dto.main_image,
            hero_image: dto.hero_image,
            featured: dto.featured,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

/// List filters; all optional and combinable.
#[derive(Clone, Default)]
pub struct DestinationFilter {
    pub category_id: Option<i32>,
    pub featured: Option<bool>,
    pub q: Option<String>,
}

impl DestinationFilter {
    pub fn from_dto(dto: DestinationFilterDto) -> Self {
        Self {
            category_id: dto.category_id,
            featured: dto.featured,
            q: dto.q,
        }
    }
}

/// Builds the API shape from a destination row and its joined category.
pub fn into_dto(
    model: entity::destination::Model,
    category: Option<entity::category::Model>,
) -> DestinationDto {
    DestinationDto {
        id: model.id,
        name: model.name,
        slug: model.slug,
        category_id: model.category_id,
        category_name: category.map(|c| c.name).unwrap_or_default(),
        summary: model.summary,
        description: model.description,
        main_image: model.main_image,
        hero_image: model.hero_image,
        featured: model.featured,
        latitude: model.latitude,
        longitude: model.longitude,
    }
}
