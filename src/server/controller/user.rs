use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, CreatedUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::CreateUserParams,
        service::{authorization::ADMIN_ROLES, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Provision a user and issue its access token.
///
/// The token is only ever returned by this endpoint.
///
/// # Access Control
/// - `admin`
///
/// # Returns
/// - `201 Created` - The user with its access token
/// - `400 Bad Request` - Invalid email or blank name
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Provisioned user", body = CreatedUserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(ADMIN_ROLES)
        .await?;

    let (user, access_token) = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserDto {
            user: user.into_dto(),
            access_token,
        }),
    ))
}

/// Get the identity behind the bearer credential.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
