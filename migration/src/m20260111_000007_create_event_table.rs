use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000004_create_destination_table::Destination;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::DestinationId))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(date(Event::Date))
                    .col(string(Event::Location))
                    .col(string_null(Event::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_destination_id")
                            .from(Event::Table, Event::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    DestinationId,
    Title,
    Description,
    Date,
    Location,
    Image,
}
