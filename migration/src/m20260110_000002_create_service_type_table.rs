use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceType::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceType::Id))
                    .col(string_uniq(ServiceType::Name))
                    .col(string_null(ServiceType::Icon))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceType {
    Table,
    Id,
    Name,
    Icon,
}
