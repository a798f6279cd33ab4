use chrono::NaiveDate;

use crate::model::event::{CreateEventDto, EventDto, EventFollowDto, UpdateEventDto};

pub struct CreateEventParams {
    pub destination_id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub image: Option<String>,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            destination_id: dto.destination_id,
            title: dto.title,
            description: dto.description,
            date: dto.date,
            location: dto.location,
            image: dto.image,
        }
    }
}

#[derive(Clone)]
pub struct UpdateEventParams {
    pub id: i32,
    pub destination_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub image: Option<Option<String>>,
}

impl UpdateEventParams {
    pub fn from_dto(id: i32, dto: UpdateEventDto) -> Self {
        Self {
            id,
            destination_id: dto.destination_id,
            title: dto.title,
            description: dto.description,
            date: dto.date,
            location: dto.location,
            image: dto.image,
        }
    }
}

/// List filters for events.
#[derive(Clone, Default)]
pub struct EventFilter {
    pub destination_id: Option<i32>,
    pub q: Option<String>,
}

pub fn into_dto(
    model: entity::event::Model,
    destination: Option<entity::destination::Model>,
) -> EventDto {
    EventDto {
        id: model.id,
        destination_id: model.destination_id,
        destination_name: destination.map(|d| d.name).unwrap_or_default(),
        title: model.title,
        description: model.description,
        date: model.date,
        location: model.location,
        image: model.image,
    }
}

impl From<entity::event_follow::Model> for EventFollowDto {
    fn from(model: entity::event_follow::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            event_id: model.event_id,
        }
    }
}
