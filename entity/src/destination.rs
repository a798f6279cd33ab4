use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "destination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// URL-safe identifier derived from the name. Unique and non-empty.
    #[sea_orm(unique)]
    pub slug: String,
    pub category_id: i32,
    pub summary: String,
    /// Long-form markdown body rendered on the detail page.
    pub description: String,
    pub main_image: Option<String>,
    pub hero_image: Option<String>,
    pub featured: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::gallery_image::Entity")]
    GalleryImage,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::destination_service::Entity")]
    DestinationService,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::gallery_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GalleryImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
