use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn pair_exists(&self, user_id: i32, destination_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::DestinationId.eq(destination_id))
            .count(self.db)
            .await?
            > 0)
    }

    pub async fn create(
        &self,
        user_id: i32,
        destination_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            destination_id: ActiveValue::Set(destination_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(id).one(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }

    /// A user's favorites joined with the destination rows they point at.
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::favorite::Model, Option<entity::destination::Model>)>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Destination)
            .all(self.db)
            .await
    }

    /// Favorite rows pointing at one destination.
    pub async fn get_by_destination(
        &self,
        destination_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::DestinationId.eq(destination_id))
            .all(self.db)
            .await
    }
}
