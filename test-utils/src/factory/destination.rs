use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a destination in the given category with a unique name/slug.
pub async fn create_destination(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::destination::Model, DbErr> {
    DestinationFactory::new(db, category_id).build().await
}

/// Factory for destinations needing non-default fields.
///
/// # Example
///
/// ```rust,ignore
/// let destination = DestinationFactory::new(&db, category.id)
///     .featured(true)
///     .build()
///     .await?;
/// ```
pub struct DestinationFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    slug: String,
    featured: bool,
    main_image: Option<String>,
}

impl<'a> DestinationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            name: format!("Destination {id}"),
            slug: format!("destination-{id}"),
            featured: false,
            main_image: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn main_image(mut self, image: impl Into<String>) -> Self {
        self.main_image = Some(image.into());
        self
    }

    pub async fn build(self) -> Result<entity::destination::Model, DbErr> {
        entity::destination::ActiveModel {
            name: ActiveValue::Set(self.name.clone()),
            slug: ActiveValue::Set(self.slug.clone()),
            category_id: ActiveValue::Set(self.category_id),
            summary: ActiveValue::Set(format!("Summary of {}", self.name)),
            description: ActiveValue::Set(format!("Long description of {}", self.name)),
            main_image: ActiveValue::Set(self.main_image),
            hero_image: ActiveValue::Set(None),
            featured: ActiveValue::Set(self.featured),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
