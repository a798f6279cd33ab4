use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::service::{
    CreateServiceParams, CreateServiceTypeParams, UpdateServiceParams, UpdateServiceTypeParams,
};

pub struct ServiceTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateServiceTypeParams,
    ) -> Result<entity::service_type::Model, DbErr> {
        entity::service_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            icon: ActiveValue::Set(params.icon),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::service_type::Model>, DbErr> {
        entity::prelude::ServiceType::find()
            .order_by_asc(entity::service_type::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::service_type::Model>, DbErr> {
        entity::prelude::ServiceType::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::ServiceType::find()
            .filter(entity::service_type::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::service_type::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn count_services(&self, service_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::ServiceTypeId.eq(service_type_id))
            .count(self.db)
            .await
    }

    pub async fn update(
        &self,
        params: UpdateServiceTypeParams,
    ) -> Result<Option<entity::service_type::Model>, DbErr> {
        let Some(existing) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut service_type: entity::service_type::ActiveModel = existing.into();
        if let Some(name) = params.name {
            service_type.name = ActiveValue::Set(name);
        }
        if let Some(icon) = params.icon {
            service_type.icon = ActiveValue::Set(icon);
        }

        Ok(Some(service_type.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::ServiceType::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }
}

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateServiceParams,
    ) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            name: ActiveValue::Set(params.name),
            service_type_id: ActiveValue::Set(params.service_type_id),
            location: ActiveValue::Set(params.location),
            description: ActiveValue::Set(params.description),
            price_min: ActiveValue::Set(params.price_min),
            price_max: ActiveValue::Set(params.price_max),
            image: ActiveValue::Set(params.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists services with their types, optionally filtered by type and by
    /// substring across name/description.
    pub async fn get_all(
        &self,
        service_type_id: Option<i32>,
        q: Option<&str>,
    ) -> Result<Vec<(entity::service::Model, Option<entity::service_type::Model>)>, DbErr> {
        let mut query = entity::prelude::Service::find()
            .find_also_related(entity::prelude::ServiceType)
            .order_by_asc(entity::service::Column::Name);

        if let Some(type_id) = service_type_id {
            query = query.filter(entity::service::Column::ServiceTypeId.eq(type_id));
        }
        if let Some(q) = q.filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::service::Column::Name.contains(q))
                    .add(entity::service::Column::Description.contains(q)),
            );
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::service::Model, Option<entity::service_type::Model>)>, DbErr> {
        entity::prelude::Service::find_by_id(id)
            .find_also_related(entity::prelude::ServiceType)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Service::find_by_id(id)
            .count(self.db)
            .await?
            > 0)
    }

    pub async fn update(
        &self,
        params: UpdateServiceParams,
    ) -> Result<Option<entity::service::Model>, DbErr> {
        let Some((existing, _)) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut service: entity::service::ActiveModel = existing.into();
        if let Some(name) = params.name {
            service.name = ActiveValue::Set(name);
        }
        if let Some(service_type_id) = params.service_type_id {
            service.service_type_id = ActiveValue::Set(service_type_id);
        }
        if let Some(location) = params.location {
            service.location = ActiveValue::Set(location);
        }
        if let Some(description) = params.description {
            service.description = ActiveValue::Set(description);
        }
        if let Some(price_min) = params.price_min {
            service.price_min = ActiveValue::Set(Some(price_min));
        }
        if let Some(price_max) = params.price_max {
            service.price_max = ActiveValue::Set(Some(price_max));
        }
        if let Some(image) = params.image {
            service.image = ActiveValue::Set(image);
        }

        Ok(Some(service.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }
}
