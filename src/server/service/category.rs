use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, destination::DestinationRepository},
    error::AppError,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category; names are unique across the table.
    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::Validation("Category name is required".to_string()));
        }

        let repo = CategoryRepository::new(self.db);

        if repo.name_exists(&params.name, None).await? {
            return Err(AppError::Conflict(format!(
                "A category named '{}' already exists",
                params.name
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, AppError> {
        Ok(CategoryRepository::new(self.db).get_by_id(id).await?)
    }

    /// Applies a patch. Returns `None` when the category does not exist.
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<Option<entity::category::Model>, AppError> {
        let repo = CategoryRepository::new(self.db);

        if let Some(name) = &params.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("Category name is required".to_string()));
            }
            if repo.name_exists(name, Some(params.id)).await? {
                return Err(AppError::Conflict(format!(
                    "A category named '{name}' already exists"
                )));
            }
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes a category. Rejected while destinations still reference it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        let in_use = DestinationRepository::new(self.db)
            .count_by_category(id)
            .await?;
        if in_use > 0 {
            return Err(AppError::Conflict(format!(
                "Category still has {in_use} destinations"
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
