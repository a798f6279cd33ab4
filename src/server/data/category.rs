use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::{CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Checks name uniqueness, optionally ignoring one row (the row being
    /// updated).
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Category::find().filter(entity::category::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a patch: only fields present in the params overwrite stored
    /// values. Returns `None` when the row does not exist.
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(existing) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut category: entity::category::ActiveModel = existing.into();
        if let Some(name) = params.name {
            category.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            category.description = ActiveValue::Set(description);
        }
        if let Some(image) = params.image {
            category.image = ActiveValue::Set(image);
        }

        Ok(Some(category.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }
}
