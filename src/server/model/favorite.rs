use crate::model::favorite::FavoriteDto;

/// Builds the API shape from a favorite row and its joined destination.
pub fn into_dto(
    model: entity::favorite::Model,
    destination: Option<entity::destination::Model>,
) -> FavoriteDto {
    let (name, slug, image) = destination
        .map(|d| (d.name, d.slug, d.main_image))
        .unwrap_or_default();

    FavoriteDto {
        id: model.id,
        user_id: model.user_id,
        destination_id: model.destination_id,
        destination_name: name,
        destination_slug: slug,
        main_image: image,
    }
}
