use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        destination::DestinationRepository,
        event::{EventFollowRepository, EventRepository},
        user::UserRepository,
    },
    error::AppError,
    model::event::{CreateEventParams, EventFilter, UpdateEventParams},
};

type EventWithDestination = (entity::event::Model, Option<entity::destination::Model>);

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<EventWithDestination, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::Validation("Event title is required".to_string()));
        }

        if DestinationRepository::new(self.db)
            .get_by_id(params.destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        let repo = EventRepository::new(self.db);
        let created = repo.create(params).await?;

        repo.get_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found after creation".to_string()))
    }

    pub async fn get_all(&self, filter: EventFilter) -> Result<Vec<EventWithDestination>, AppError> {
        Ok(EventRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventWithDestination>, AppError> {
        Ok(EventRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        params: UpdateEventParams,
    ) -> Result<Option<EventWithDestination>, AppError> {
        if let Some(destination_id) = params.destination_id {
            if DestinationRepository::new(self.db)
                .get_by_id(destination_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Destination not found".to_string()));
            }
        }

        let repo = EventRepository::new(self.db);

        let Some(updated) = repo.update(params).await? else {
            return Ok(None);
        };

        Ok(repo.get_by_id(updated.id).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

pub struct EventFollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventFollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Follows an event for a user. Requires the user, the event, and the
    /// event's destination to exist; one follow per (user, event) pair.
    pub async fn follow(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<entity::event_follow::Model, AppError> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let Some((_, destination)) = EventRepository::new(self.db).get_by_id(event_id).await?
        else {
            return Err(AppError::NotFound("Event not found".to_string()));
        };
        if destination.is_none() {
            return Err(AppError::NotFound(
                "Destination for this event not found".to_string(),
            ));
        }

        let repo = EventFollowRepository::new(self.db);

        if repo.pair_exists(user_id, event_id).await? {
            return Err(AppError::Conflict(
                "User already follows this event".to_string(),
            ));
        }

        Ok(repo.create(user_id, event_id).await?)
    }

    pub async fn unfollow(&self, id: i32) -> Result<(), AppError> {
        let repo = EventFollowRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Event follow not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn followed_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<EventWithDestination>, AppError> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(EventFollowRepository::new(self.db)
            .followed_by_user(user_id)
            .await?)
    }

    pub async fn followers_of_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::event_follow::Model>, AppError> {
        if EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(EventFollowRepository::new(self.db)
            .followers_of_event(event_id)
            .await?)
    }
}
