use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000004_create_destination_table::Destination,
    m20260110_000005_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DestinationService::Table)
                    .if_not_exists()
                    .col(pk_auto(DestinationService::Id))
                    .col(integer(DestinationService::DestinationId))
                    .col(integer(DestinationService::ServiceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_service_destination_id")
                            .from(DestinationService::Table, DestinationService::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_service_service_id")
                            .from(DestinationService::Table, DestinationService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DestinationService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DestinationService {
    Table,
    Id,
    DestinationId,
    ServiceId,
}
