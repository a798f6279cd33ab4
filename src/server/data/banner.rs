use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::banner::{CreateBannerParams, UpdateBannerParams};

pub struct BannerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBannerParams) -> Result<entity::banner::Model, DbErr> {
        entity::banner::ActiveModel {
            image: ActiveValue::Set(params.image),
            title: ActiveValue::Set(params.title),
            sort_order: ActiveValue::Set(params.sort_order),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists banners in display order. `active` filters by flag when given;
    /// the admin list passes `None` to see soft-deleted rows too.
    pub async fn get_all(&self, active: Option<bool>) -> Result<Vec<entity::banner::Model>, DbErr> {
        let mut query = entity::prelude::Banner::find()
            .order_by_asc(entity::banner::Column::SortOrder)
            .order_by_asc(entity::banner::Column::Id);

        if let Some(active) = active {
            query = query.filter(entity::banner::Column::Active.eq(active));
        }

        query.all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::banner::Model>, DbErr> {
        entity::prelude::Banner::find_by_id(id).one(self.db).await
    }

    pub async fn update(
        &self,
        params: UpdateBannerParams,
    ) -> Result<Option<entity::banner::Model>, DbErr> {
        let Some(existing) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut banner: entity::banner::ActiveModel = existing.into();
        if let Some(image) = params.image {
            banner.image = ActiveValue::Set(image);
        }
        if let Some(title) = params.title {
            banner.title = ActiveValue::Set(title);
        }
        if let Some(sort_order) = params.sort_order {
            banner.sort_order = ActiveValue::Set(sort_order);
        }
        if let Some(active) = params.active {
            banner.active = ActiveValue::Set(active);
        }

        Ok(Some(banner.update(self.db).await?))
    }

    /// Soft delete: clears the active flag, leaving the row in place.
    pub async fn deactivate(&self, id: i32) -> Result<Option<entity::banner::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut banner: entity::banner::ActiveModel = existing.into();
        banner.active = ActiveValue::Set(false);

        Ok(Some(banner.update(self.db).await?))
    }
}
