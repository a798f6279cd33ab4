//! Axum route configuration and API documentation.
//!
//! Every API endpoint is registered through `utoipa_axum` so the route
//! table and the OpenAPI document cannot drift apart. Stored uploads and
//! static HTML fragments are served straight from disk.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, banner, category, dashboard, destination, event, favorite, gallery, service, upload,
        user,
    },
    state::AppState,
};

/// Slack on top of the per-file cap for multipart framing and text fields.
const BODY_LIMIT_OVERHEAD: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(info(
    title = "Tourboard API",
    description = "REST API for the tourism portal: categories, destinations, \
                   services, events, favorites, banners, gallery and users."
))]
struct ApiDoc;

pub fn router(config: &Config) -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_session_user))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category_by_id,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(
            destination::get_destinations,
            destination::create_destination
        ))
        .routes(routes!(
            destination::get_destination_by_id,
            destination::update_destination,
            destination::delete_destination
        ))
        .routes(routes!(destination::get_destination_by_slug))
        .routes(routes!(destination::get_destination_services))
        .routes(routes!(destination::create_destination_service))
        .routes(routes!(destination::delete_destination_service))
        .routes(routes!(service::get_service_types, service::create_service_type))
        .routes(routes!(
            service::get_service_type_by_id,
            service::update_service_type,
            service::delete_service_type
        ))
        .routes(routes!(service::get_services, service::create_service))
        .routes(routes!(
            service::get_service_by_id,
            service::update_service,
            service::delete_service
        ))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(
            event::get_event_by_id,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(event::create_event_follow))
        .routes(routes!(event::delete_event_follow))
        .routes(routes!(event::get_followed_events))
        .routes(routes!(event::get_event_followers))
        .routes(routes!(favorite::create_favorite))
        .routes(routes!(favorite::delete_favorite))
        .routes(routes!(favorite::get_favorites_by_user))
        .routes(routes!(favorite::get_favorites_by_destination))
        .routes(routes!(gallery::create_gallery_images))
        .routes(routes!(gallery::get_gallery_by_destination))
        .routes(routes!(gallery::delete_gallery_image))
        .routes(routes!(banner::get_banners, banner::create_banner))
        .routes(routes!(
            banner::get_banner_by_id,
            banner::update_banner,
            banner::delete_banner
        ))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(dashboard::get_dashboard_stats))
        .routes(routes!(upload::upload_image))
        .routes(routes!(upload::upload_images))
        .split_for_parts();

    api_router
        .layer(DefaultBodyLimit::max(
            config.max_upload_bytes + BODY_LIMIT_OVERHEAD,
        ))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .nest_service("/fragments", ServeDir::new("assets/fragments"))
        .layer(CorsLayer::permissive())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
