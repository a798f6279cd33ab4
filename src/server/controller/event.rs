use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        event::{
            CreateEventDto, CreateEventFollowDto, EventDto, EventFollowDto, UpdateEventDto,
        },
    },
    server::{
        error::AppError,
        model::event::{self, CreateEventParams, EventFilter, UpdateEventParams},
        service::event::{EventFollowService, EventService},
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct EventListQuery {
    pub destination_id: Option<i32>,
    pub q: Option<String>,
}

/// Create an event at a destination.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Created event", body = Envelope<EventDto>),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let (created, destination) = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(event::into_dto(created, destination))),
    ))
}

/// List events, soonest first, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("destination_id" = Option<i32>, Query, description = "Filter by destination"),
        ("q" = Option<String>, Query, description = "Substring match across title and description")
    ),
    responses(
        (status = 200, description = "Matching events", body = Envelope<Vec<EventDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_all(EventFilter {
            destination_id: query.destination_id,
            q: query.q,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            events
                .into_iter()
                .map(|(model, destination)| event::into_dto(model, destination))
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get an event by id.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = Envelope<EventDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match EventService::new(&state.db).get_by_id(id).await? {
        Some((model, destination)) => Ok((
            StatusCode::OK,
            Json(Envelope::new(event::into_dto(model, destination))),
        )),
        None => Err(AppError::NotFound("Event not found".to_string())),
    }
}

/// Partially update an event.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event", body = Envelope<EventDto>),
        (status = 404, description = "Event or destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    match EventService::new(&state.db)
        .update(UpdateEventParams::from_dto(id, payload))
        .await?
    {
        Some((model, destination)) => Ok((
            StatusCode::OK,
            Json(Envelope::new(event::into_dto(model, destination))),
        )),
        None => Err(AppError::NotFound("Event not found".to_string())),
    }
}

/// Delete an event.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}

/// Follow an event for a user. One follow per (user, event) pair.
#[utoipa::path(
    post,
    path = "/api/events-followed",
    tag = EVENT_TAG,
    request_body = CreateEventFollowDto,
    responses(
        (status = 201, description = "Follow created", body = Envelope<EventFollowDto>),
        (status = 404, description = "User, event or destination not found", body = ErrorDto),
        (status = 409, description = "Already following", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event_follow(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventFollowDto>,
) -> Result<impl IntoResponse, AppError> {
    let follow = EventFollowService::new(&state.db)
        .follow(payload.user_id, payload.event_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(EventFollowDto::from(follow))),
    ))
}

/// Stop following (by follow row id).
#[utoipa::path(
    delete,
    path = "/api/events-followed/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Follow row ID")),
    responses(
        (status = 200, description = "Follow removed"),
        (status = 404, description = "Follow not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event_follow(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EventFollowService::new(&state.db).unfollow(id).await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}

/// Events a user follows, with destinations, soonest first.
#[utoipa::path(
    get,
    path = "/api/events/followed/{user_id}",
    tag = EVENT_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Followed events", body = Envelope<Vec<EventDto>>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_followed_events(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventFollowService::new(&state.db)
        .followed_by_user(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            events
                .into_iter()
                .map(|(model, destination)| event::into_dto(model, destination))
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Follow rows for one event.
#[utoipa::path(
    get,
    path = "/api/events/{id}/followers",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Followers of the event", body = Envelope<Vec<EventFollowDto>>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_followers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let followers = EventFollowService::new(&state.db)
        .followers_of_event(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            followers
                .into_iter()
                .map(EventFollowDto::from)
                .collect::<Vec<_>>(),
        )),
    ))
}
