use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a user. Open endpoint; new accounts default to the `user` role.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created user", body = Envelope<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, state.verifier.as_ref())
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(Envelope::new(UserDto::from(user)))))
}

/// List all users. Admin only.
///
/// # Access Control
/// - `Admin` - Only admins can enumerate accounts
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Envelope<Vec<UserDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db, state.verifier.as_ref())
        .get_all()
        .await?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            users.into_iter().map(UserDto::from).collect::<Vec<_>>(),
        )),
    ))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = Envelope<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match UserService::new(&state.db, state.verifier.as_ref())
        .get_by_id(id)
        .await?
    {
        Some(user) => Ok((StatusCode::OK, Json(Envelope::new(UserDto::from(user))))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Partially update a user. Admin only (role changes included).
///
/// # Access Control
/// - `Admin` - Only admins can modify accounts
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = Envelope<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    match UserService::new(&state.db, state.verifier.as_ref())
        .update(id, payload)
        .await?
    {
        Some(user) => Ok((StatusCode::OK, Json(Envelope::new(UserDto::from(user))))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Delete a user. Admin only.
///
/// # Access Control
/// - `Admin` - Only admins can remove accounts
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db, state.verifier.as_ref())
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(Envelope::new(()))))
}
