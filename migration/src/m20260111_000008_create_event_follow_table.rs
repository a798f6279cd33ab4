use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000003_create_user_table::User, m20260111_000007_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventFollow::Table)
                    .if_not_exists()
                    .col(pk_auto(EventFollow::Id))
                    .col(integer(EventFollow::UserId))
                    .col(integer(EventFollow::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_follow_user_id")
                            .from(EventFollow::Table, EventFollow::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_follow_event_id")
                            .from(EventFollow::Table, EventFollow::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventFollow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventFollow {
    Table,
    Id,
    UserId,
    EventId,
}
