use crate::{
    client::model::error::ApiError,
    model::event::{CreateEventDto, CreateEventFollowDto, EventDto, EventFollowDto, UpdateEventDto},
};

use super::helper::{
    delete, get, parse_empty_envelope, parse_envelope, post, put, send_request, serialize_json,
};

pub async fn get_events(destination_id: Option<i32>) -> Result<Vec<EventDto>, ApiError> {
    let url = match destination_id {
        Some(id) => format!("/api/events?destination_id={id}"),
        None => "/api/events".to_string(),
    };

    let response = send_request(get(&url)).await?;
    parse_envelope(response).await
}

pub async fn create_event(payload: CreateEventDto) -> Result<EventDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/events").body(body)).await?;
    parse_envelope(response).await
}

pub async fn update_event(id: i32, payload: UpdateEventDto) -> Result<EventDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put(&format!("/api/events/{id}")).body(body)).await?;
    parse_envelope(response).await
}

pub async fn delete_event(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/events/{id}"))).await?;
    parse_empty_envelope(response).await
}

/// Follow an event for a user.
pub async fn follow_event(user_id: i32, event_id: i32) -> Result<EventFollowDto, ApiError> {
    let body = serialize_json(&CreateEventFollowDto { user_id, event_id })?;

    let response = send_request(post("/api/events-followed").body(body)).await?;
    parse_envelope(response).await
}

pub async fn unfollow_event(follow_id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/events-followed/{follow_id}"))).await?;
    parse_empty_envelope(response).await
}

pub async fn get_event_followers(event_id: i32) -> Result<Vec<EventFollowDto>, ApiError> {
    let response = send_request(get(&format!("/api/events/{event_id}/followers"))).await?;
    parse_envelope(response).await
}
