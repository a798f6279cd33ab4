use sea_orm::DatabaseConnection;

use crate::server::{
    data::service::{ServiceRepository, ServiceTypeRepository},
    error::AppError,
    model::service::{
        CreateServiceParams, CreateServiceTypeParams, UpdateServiceParams, UpdateServiceTypeParams,
    },
};

pub struct ServiceTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateServiceTypeParams,
    ) -> Result<entity::service_type::Model, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Service type name is required".to_string(),
            ));
        }

        let repo = ServiceTypeRepository::new(self.db);

        if repo.name_exists(&params.name, None).await? {
            return Err(AppError::Conflict(format!(
                "A service type named '{}' already exists",
                params.name
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::service_type::Model>, AppError> {
        Ok(ServiceTypeRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::service_type::Model>, AppError> {
        Ok(ServiceTypeRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        params: UpdateServiceTypeParams,
    ) -> Result<Option<entity::service_type::Model>, AppError> {
        let repo = ServiceTypeRepository::new(self.db);

        if let Some(name) = &params.name {
            if repo.name_exists(name, Some(params.id)).await? {
                return Err(AppError::Conflict(format!(
                    "A service type named '{name}' already exists"
                )));
            }
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes a service type. Rejected while services still reference it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ServiceTypeRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Service type not found".to_string()));
        }

        let in_use = repo.count_services(id).await?;
        if in_use > 0 {
            return Err(AppError::Conflict(format!(
                "Service type still has {in_use} services"
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

pub struct ServiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateServiceParams,
    ) -> Result<(entity::service::Model, Option<entity::service_type::Model>), AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::Validation("Service name is required".to_string()));
        }
        validate_price_range(params.price_min, params.price_max)?;

        if ServiceTypeRepository::new(self.db)
            .get_by_id(params.service_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Service type not found".to_string()));
        }

        let repo = ServiceRepository::new(self.db);
        let created = repo.create(params).await?;

        repo.get_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found after creation".to_string()))
    }

    pub async fn get_all(
        &self,
        service_type_id: Option<i32>,
        q: Option<&str>,
    ) -> Result<Vec<(entity::service::Model, Option<entity::service_type::Model>)>, AppError> {
        Ok(ServiceRepository::new(self.db)
            .get_all(service_type_id, q)
            .await?)
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::service::Model, Option<entity::service_type::Model>)>, AppError>
    {
        Ok(ServiceRepository::new(self.db).get_by_id(id).await?)
    }

    /// Applies a patch. The price range is validated against the values the
    /// row will hold after the patch, so supplying only one bound still
    /// cannot cross the other.
    pub async fn update(
        &self,
        params: UpdateServiceParams,
    ) -> Result<Option<(entity::service::Model, Option<entity::service_type::Model>)>, AppError>
    {
        let repo = ServiceRepository::new(self.db);

        let Some((existing, _)) = repo.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let effective_min = params.price_min.or(existing.price_min);
        let effective_max = params.price_max.or(existing.price_max);
        validate_price_range(effective_min, effective_max)?;

        if let Some(service_type_id) = params.service_type_id {
            if ServiceTypeRepository::new(self.db)
                .get_by_id(service_type_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Service type not found".to_string()));
            }
        }

        let Some(updated) = repo.update(params).await? else {
            return Ok(None);
        };

        Ok(repo.get_by_id(updated.id).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ServiceRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

fn validate_price_range(min: Option<f64>, max: Option<f64>) -> Result<(), AppError> {
    for bound in [min, max].into_iter().flatten() {
        if bound < 0.0 || !bound.is_finite() {
            return Err(AppError::Validation(
                "Prices must be non-negative numbers".to_string(),
            ));
        }
    }

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::Validation(
                "Minimum price cannot exceed maximum price".to_string(),
            ));
        }
    }

    Ok(())
}
