use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_service_type_table::ServiceType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(string(Service::Name))
                    .col(integer(Service::ServiceTypeId))
                    .col(string(Service::Location))
                    .col(text(Service::Description))
                    .col(double_null(Service::PriceMin))
                    .col(double_null(Service::PriceMax))
                    .col(string_null(Service::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_service_type_id")
                            .from(Service::Table, Service::ServiceTypeId)
                            .to(ServiceType::Table, ServiceType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    Name,
    ServiceTypeId,
    Location,
    Description,
    PriceMin,
    PriceMax,
    Image,
}
