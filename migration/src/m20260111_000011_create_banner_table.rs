use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(pk_auto(Banner::Id))
                    .col(string(Banner::Image))
                    .col(string(Banner::Title))
                    .col(integer(Banner::SortOrder))
                    .col(boolean(Banner::Active))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Banner {
    Table,
    Id,
    Image,
    SortOrder,
    Title,
    Active,
}
