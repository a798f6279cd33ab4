use crate::model::service::{
    CreateServiceDto, CreateServiceTypeDto, DestinationServiceDto, ServiceDto, ServiceTypeDto,
    UpdateServiceDto, UpdateServiceTypeDto,
};

pub struct CreateServiceTypeParams {
    pub name: String,
    pub icon: Option<String>,
}

impl CreateServiceTypeParams {
    pub fn from_dto(dto: CreateServiceTypeDto) -> Self {
        Self {
            name: dto.name,
            icon: dto.icon,
        }
    }
}

#[derive(Clone)]
pub struct UpdateServiceTypeParams {
    pub id: i32,
    pub name: Option<String>,
    pub icon: Option<Option<String>>,
}

impl UpdateServiceTypeParams {
    pub fn from_dto(id: i32, dto: UpdateServiceTypeDto) -> Self {
        Self {
            id,
            name: dto.name,
            icon: dto.icon,
        }
    }
}

pub struct CreateServiceParams {
    pub name: String,
    pub service_type_id: i32,
    pub location: String,
    pub description: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub image: Option<String>,
}

impl CreateServiceParams {
    pub fn from_dto(dto: CreateServiceDto) -> Self {
        Self {
            name: dto.name,
            service_type_id: dto.service_type_id,
            location: dto.location,
            description: dto.description,
            price_min: dto.price_min,
            price_max: dto.price_max,
            image: dto.image,
        }
    }
}

#[derive(Clone)]
pub struct UpdateServiceParams {
    pub id: i32,
    pub name: Option<String>,
    pub service_type_id: Option<i32>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub image: Option<Option<String>>,
}

impl UpdateServiceParams {
    pub fn from_dto(id: i32, dto: UpdateServiceDto) -> Self {
        Self {
            id,
            name: dto.name,
            service_type_id: dto.service_type_id,
            location: dto.location,
            description: dto.description,
            price_min: dto.price_min,
            price_max: dto.price_max,
            image: dto.image,
        }
    }
}

impl From<entity::service_type::Model> for ServiceTypeDto {
    fn from(model: entity::service_type::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            icon: model.icon,
        }
    }
}

pub fn into_dto(
    model: entity::service::Model,
    service_type: Option<entity::service_type::Model>,
) -> ServiceDto {
    ServiceDto {
        id: model.id,
        name: model.name,
        service_type_id: model.service_type_id,
        service_type_name: service_type.map(|t| t.name).unwrap_or_default(),
        location: model.location,
        description: model.description,
        price_min: model.price_min,
        price_max: model.price_max,
        image: model.image,
    }
}

impl From<entity::destination_service::Model> for DestinationServiceDto {
    fn from(model: entity::destination_service::Model) -> Self {
        Self {
            id: model.id,
            destination_id: model.destination_id,
            service_id: model.service_id,
        }
    }
}
