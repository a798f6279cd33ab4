use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::destination::{
    CreateDestinationParams, DestinationFilter, UpdateDestinationParams,
};

type DestinationWithCategory = (
    entity::destination::Model,
    Option<entity::category::Model>,
);

pub struct DestinationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateDestinationParams,
    ) -> Result<entity::destination::Model, DbErr> {
        entity::destination::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            category_id: ActiveValue::Set(params.category_id),
            summary: ActiveValue::Set(params.summary),
            description: ActiveValue::Set(params.description),
            main_image: ActiveValue::Set(params.main_image),
            hero_image: ActiveValue::Set(params.hero_image),
            featured: ActiveValue::Set(params.featured),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists destinations with their categories. Filters combine freely:
    /// parent category, featured flag, substring across name/description.
    pub async fn get_all(
        &self,
        filter: DestinationFilter,
    ) -> Result<Vec<DestinationWithCategory>, DbErr> {
        let mut query = entity::prelude::Destination::find()
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::destination::Column::Name);

        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::destination::Column::CategoryId.eq(category_id));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(entity::destination::Column::Featured.eq(featured));
        }
        if let Some(q) = filter.q.as_deref().filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::destination::Column::Name.contains(q))
                    .add(entity::destination::Column::Description.contains(q)),
            );
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DestinationWithCategory>, DbErr> {
        entity::prelude::Destination::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<DestinationWithCategory>, DbErr> {
        entity::prelude::Destination::find()
            .filter(entity::destination::Column::Slug.eq(slug))
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Destination::find()
            .filter(entity::destination::Column::Slug.eq(slug))
            .count(self.db)
            .await?
            > 0)
    }

    pub async fn count_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Destination::find()
            .filter(entity::destination::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await
    }

    /// Applies a patch; the slug column is never touched here.
    pub async fn update(
        &self,
        params: UpdateDestinationParams,
    ) -> Result<Option<entity::destination::Model>, DbErr> {
        let Some((existing, _)) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut destination: entity::destination::ActiveModel = existing.into();
        if let Some(name) = params.name {
            destination.name = ActiveValue::Set(name);
        }
        if let Some(category_id) = params.category_id {
            destination.category_id = ActiveValue::Set(category_id);
        }
        if let Some(summary) = params.summary {
            destination.summary = ActiveValue::Set(summary);
        }
        if let Some(description) = params.description {
            destination.description = ActiveValue::Set(description);
        }
        if let Some(main_image) = params.main_image {
            destination.main_image = ActiveValue::Set(main_image);
        }
        if let Some(hero_image) = params.hero_image {
            destination.hero_image = ActiveValue::Set(hero_image);
        }
        if let Some(featured) = params.featured {
            destination.featured = ActiveValue::Set(featured);
        }
        if let Some(latitude) = params.latitude {
            destination.latitude = ActiveValue::Set(Some(latitude));
        }
        if let Some(longitude) = params.longitude {
            destination.longitude = ActiveValue::Set(Some(longitude));
        }

        Ok(Some(destination.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::Destination::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }

    /// Services linked to a destination, with their types.
    pub async fn services_for(
        &self,
        destination_id: i32,
    ) -> Result<Vec<(entity::service::Model, Option<entity::service_type::Model>)>, DbErr> {
        let links = entity::prelude::DestinationService::find()
            .filter(entity::destination_service::Column::DestinationId.eq(destination_id))
            .all(self.db)
            .await?;

        let service_ids: Vec<i32> = links.iter().map(|link| link.service_id).collect();
        if service_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(service_ids))
            .find_also_related(entity::prelude::ServiceType)
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await
    }

    /// Appends a row to the visit log. Callers must gate on the visits
    /// capability; the table is not part of the migrated schema.
    pub async fn record_visit(&self, destination_id: i32) -> Result<(), DbErr> {
        entity::visit::ActiveModel {
            destination_id: ActiveValue::Set(destination_id),
            visited_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}

/// Repository for the destination/service join rows.
pub struct DestinationServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn pair_exists(&self, destination_id: i32, service_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::DestinationService::find()
            .filter(entity::destination_service::Column::DestinationId.eq(destination_id))
            .filter(entity::destination_service::Column::ServiceId.eq(service_id))
            .count(self.db)
            .await?
            > 0)
    }

    pub async fn create(
        &self,
        destination_id: i32,
        service_id: i32,
    ) -> Result<entity::destination_service::Model, DbErr> {
        entity::destination_service::ActiveModel {
            destination_id: ActiveValue::Set(destination_id),
            service_id: ActiveValue::Set(service_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::destination_service::Model>, DbErr> {
        entity::prelude::DestinationService::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::DestinationService::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }
}
