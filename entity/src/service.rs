use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub service_type_id: i32,
    pub location: String,
    pub description: String,
    /// Price range bounds. When both are present, min <= max is enforced
    /// by the service layer before the row is written.
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_type::Entity",
        from = "Column::ServiceTypeId",
        to = "super::service_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ServiceType,
    #[sea_orm(has_many = "super::destination_service::Entity")]
    DestinationService,
}

impl Related<super::service_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
