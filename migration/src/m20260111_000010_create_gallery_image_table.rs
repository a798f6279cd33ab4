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
                    .table(GalleryImage::Table)
                    .if_not_exists()
                    .col(pk_auto(GalleryImage::Id))
                    .col(integer(GalleryImage::DestinationId))
                    .col(string(GalleryImage::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_image_destination_id")
                            .from(GalleryImage::Table, GalleryImage::DestinationId)
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
            .drop_table(Table::drop().table(GalleryImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GalleryImage {
    Table,
    Id,
    DestinationId,
    Image,
}
