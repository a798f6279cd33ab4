use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(entity::user::Role::Admin))
            .count(self.db)
            .await?
            > 0)
    }

    pub async fn update(
        &self,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(existing) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = existing.into();
        if let Some(full_name) = params.full_name {
            user.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = params.email {
            user.email = ActiveValue::Set(email);
        }
        if let Some(password) = params.password {
            user.password = ActiveValue::Set(password);
        }
        if let Some(role) = params.role {
            user.role = ActiveValue::Set(role);
        }

        Ok(Some(user.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        Ok(entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?
            .rows_affected)
    }
}
