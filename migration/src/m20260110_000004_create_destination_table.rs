use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Destination::Table)
                    .if_not_exists()
                    .col(pk_auto(Destination::Id))
                    .col(string(Destination::Name))
                    .col(string_uniq(Destination::Slug))
                    .col(integer(Destination::CategoryId))
                    .col(text(Destination::Summary))
                    .col(text(Destination::Description))
                    .col(string_null(Destination::MainImage))
                    .col(string_null(Destination::HeroImage))
                    .col(boolean(Destination::Featured))
                    .col(double_null(Destination::Latitude))
                    .col(double_null(Destination::Longitude))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_category_id")
                            .from(Destination::Table, Destination::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Destination::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Destination {
    Table,
    Id,
    Name,
    Slug,
    CategoryId,
    Summary,
    Description,
    MainImage,
    HeroImage,
    Featured,
    Latitude,
    Longitude,
}
