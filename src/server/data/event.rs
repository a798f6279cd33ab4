use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, EventFilter, UpdateEventParams};

type EventWithDestination = (entity::event::Model, Option<entity::destination::Model>);

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            destination_id: ActiveValue::Set(params.destination_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            date: ActiveValue::Set(params.date),
            location: ActiveValue::Set(params.location),
            image: ActiveValue::Set(params.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists events with their destinations, soonest first. Filters by
    /// destination and by substring across title/description.
    pub async fn get_all(&self, filter: EventFilter) -> Result<Vec<EventWithDestination>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .find_also_related(entity::prelude::Destination)
            .order_by_asc(entity::event::Column::Date);

        if let Some(destination_id) = filter.destination_id {
            query = query.filter(entity::event::Column::DestinationId.eq(destination_id));
        }
        if let Some(q) = filter.q.as_deref().filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::event::Column::Title.contains(q))
                    .add(entity::event::Column::Description.contains(q)),
            );
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventWithDestination>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .find_also_related(entity::prelude::Destination)
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        params: UpdateEventParams,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some((existing, _)) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut event: entity::event::ActiveModel = existing.into();
        if let Some(destination_id) = params.destination_id {
            event.destination_id = ActiveValue::Set(destination_id);
        }
        if let Some(title) = params.title {
            event.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            event.description = ActiveValue::Set(description);
        }
        if let Some(date) = params.date {
            event.date = ActiveValue::Set(date);
        }
        if let Some(location) = params.location {
            event.location = ActiveValue::Set(location);
        }
        if let Some(image) = params.image {
            event.image = ActiveValue::Set(image);
        }

        Ok(Some(event.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }
}

pub struct EventFollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventFollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn pair_exists(&self, user_id: i32, event_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::EventFollow::find()
            .filter(entity::event_follow::Column::UserId.eq(user_id))
            .filter(entity::event_follow::Column::EventId.eq(event_id))
            .count(self.db)
            .await?
            > 0)
    }

    pub async fn create(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<entity::event_follow::Model, DbErr> {
        entity::event_follow::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_id: ActiveValue::Set(event_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::event_follow::Model>, DbErr> {
        entity::prelude::EventFollow::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::EventFollow::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }

    /// Events a user follows, with their destinations, soonest first.
    pub async fn followed_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<EventWithDestination>, DbErr> {
        let follows = entity::prelude::EventFollow::find()
            .filter(entity::event_follow::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        let event_ids: Vec<i32> = follows.iter().map(|follow| follow.event_id).collect();
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(event_ids))
            .find_also_related(entity::prelude::Destination)
            .order_by_asc(entity::event::Column::Date)
            .all(self.db)
            .await
    }

    /// Follow rows for one event.
    pub async fn followers_of_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::event_follow::Model>, DbErr> {
        entity::prelude::EventFollow::find()
            .filter(entity::event_follow::Column::EventId.eq(event_id))
            .all(self.db)
            .await
    }
}
