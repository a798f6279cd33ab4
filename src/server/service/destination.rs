use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::destination::CreateDestinationDto,
    server::{
        data::{
            category::CategoryRepository,
            destination::{DestinationRepository, DestinationServiceRepository},
            service::ServiceRepository,
        },
        error::AppError,
        model::destination::{
            CreateDestinationParams, DestinationFilter, UpdateDestinationParams,
        },
        util::slug,
    },
};

type DestinationWithCategory = (
    entity::destination::Model,
    Option<entity::category::Model>,
);

pub struct DestinationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a destination, deriving its slug from the name. Slug
    /// collisions get a numeric suffix (`playa`, `playa-2`, …).
    pub async fn create(
        &self,
        dto: CreateDestinationDto,
    ) -> Result<DestinationWithCategory, AppError> {
        let base = slug::slugify(&dto.name);
        if base.is_empty() {
            return Err(AppError::Validation(
                "Destination name must contain at least one alphanumeric character".to_string(),
            ));
        }

        if CategoryRepository::new(self.db)
            .get_by_id(dto.category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        let repo = DestinationRepository::new(self.db);

        let mut round = 1;
        let chosen = loop {
            let candidate = slug::candidate(&base, round);
            if !repo.slug_exists(&candidate).await? {
                break candidate;
            }
            round += 1;
        };

        let created = repo
            .create(CreateDestinationParams::from_dto(dto, chosen))
            .await?;

        repo.get_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Destination not found after creation".to_string()))
    }

    pub async fn get_all(
        &self,
        filter: DestinationFilter,
    ) -> Result<Vec<DestinationWithCategory>, AppError> {
        Ok(DestinationRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DestinationWithCategory>, AppError> {
        Ok(DestinationRepository::new(self.db).get_by_id(id).await?)
    }

    /// Looks up a destination by slug, best-effort appending to the visit
    /// log when the deployment carries one. A logging failure never breaks
    /// the public detail page.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        record_visit: bool,
    ) -> Result<Option<DestinationWithCategory>, AppError> {
        let repo = DestinationRepository::new(self.db);

        let found = repo.get_by_slug(slug).await?;

        if record_visit {
            if let Some((destination, _)) = &found {
                if let Err(err) = repo.record_visit(destination.id).await {
                    tracing::error!("Failed to record visit for '{slug}': {err}");
                }
            }
        }

        Ok(found)
    }

    /// Applies a patch; the slug never changes after creation. Returns
    /// `None` when the destination does not exist.
    pub async fn update(
        &self,
        params: UpdateDestinationParams,
    ) -> Result<Option<DestinationWithCategory>, AppError> {
        if let Some(category_id) = params.category_id {
            if CategoryRepository::new(self.db)
                .get_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Category not found".to_string()));
            }
        }

        let repo = DestinationRepository::new(self.db);

        let Some(updated) = repo.update(params).await? else {
            return Ok(None);
        };

        Ok(repo.get_by_id(updated.id).await?)
    }

    /// Deletes a destination. Rejected while the featured flag is set:
    /// clear the flag first, then delete.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DestinationRepository::new(self.db);

        let Some((destination, _)) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Destination not found".to_string()));
        };

        if destination.featured {
            return Err(AppError::Conflict(
                "Cannot delete a featured destination; unfeature it first".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Services linked to a destination.
    pub async fn services_for(
        &self,
        destination_id: i32,
    ) -> Result<Vec<(entity::service::Model, Option<entity::service_type::Model>)>, AppError> {
        let repo = DestinationRepository::new(self.db);

        if repo.get_by_id(destination_id).await?.is_none() {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }

        Ok(repo.services_for(destination_id).await?)
    }

    /// Links a service to a destination. Duplicate pairs are rejected.
    pub async fn link_service(
        &self,
        destination_id: i32,
        service_id: i32,
    ) -> Result<entity::destination_service::Model, AppError> {
        if DestinationRepository::new(self.db)
            .get_by_id(destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Destination not found".to_string()));
        }
        if !ServiceRepository::new(self.db).exists(service_id).await? {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        let links = DestinationServiceRepository::new(self.db);

        if links.pair_exists(destination_id, service_id).await? {
            return Err(AppError::Conflict(
                "Service is already linked to this destination".to_string(),
            ));
        }

        Ok(links.create(destination_id, service_id).await?)
    }

    /// Removes a destination/service link by its row id.
    pub async fn unlink_service(&self, link_id: i32) -> Result<(), AppError> {
        let links = DestinationServiceRepository::new(self.db);

        if links.get_by_id(link_id).await?.is_none() {
            return Err(AppError::NotFound(
                "Destination/service link not found".to_string(),
            ));
        }

        links.delete(link_id).await?;

        Ok(())
    }
}
