use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        rescue_team::{
            CreateRescueTeamDto, PaginatedRescueTeamsDto, RescueTeamDto, UpdateRescueTeamDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::PageRequest,
            rescue_team::{
                CreateRescueTeamParams, RescueTeam, RescueTeamFilter, UpdateRescueTeamParams,
            },
        },
        service::{
            authorization::{ADMIN_ROLES, TRIAGE_ROLES},
            rescue_team::RescueTeamService,
        },
        state::AppState,
        util::parse::{non_blank, parse_enum_filter},
    },
};

/// Tag for grouping rescue team endpoints in OpenAPI documentation
pub static RESCUE_TEAM_TAG: &str = "rescue-team";

#[derive(Deserialize, Default)]
pub struct RescueTeamQuery {
    pub status: Option<String>,
    pub specialization: Option<String>,
    pub province_city: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl RescueTeamQuery {
    fn filter(&self) -> Result<RescueTeamFilter, AppError> {
        Ok(RescueTeamFilter {
            status: parse_enum_filter("status", self.status.as_deref())?,
            specialization: parse_enum_filter("specialization", self.specialization.as_deref())?,
            province_city: non_blank(self.province_city.clone()),
        })
    }
}

/// Create a rescue team.
///
/// Missing optional fields take their defaults: specialization `general`,
/// capacity 5, no members, status `available`, no equipment.
///
/// # Access Control
/// - `admin`
///
/// # Returns
/// - `201 Created` - The created team
/// - `400 Bad Request` - Missing required field or invalid count
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - A live team already has this name
#[utoipa::path(
    post,
    path = "/api/rescue-teams",
    tag = RESCUE_TEAM_TAG,
    request_body = CreateRescueTeamDto,
    responses(
        (status = 201, description = "Created rescue team", body = RescueTeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 409, description = "Team name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rescue_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRescueTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(ADMIN_ROLES)
        .await?;

    let team = RescueTeamService::new(&state.db)
        .create(CreateRescueTeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// List rescue teams, most recent first.
///
/// # Access Control
/// - `coordinator`, `admin`
#[utoipa::path(
    get,
    path = "/api/rescue-teams",
    tag = RESCUE_TEAM_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("specialization" = Option<String>, Query, description = "Filter by specialization"),
        ("province_city" = Option<String>, Query, description = "Filter by province or city"),
        ("page" = Option<u64>, Query, description = "1-based page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated rescue teams", body = PaginatedRescueTeamsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rescue_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RescueTeamQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(TRIAGE_ROLES)
        .await?;

    let page = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());
    let teams = RescueTeamService::new(&state.db)
        .get_paginated(query.filter()?, page)
        .await?;

    Ok((StatusCode::OK, Json(teams.into_dto())))
}

/// List available rescue teams, longest waiting first.
///
/// # Access Control
/// - `coordinator`, `admin`
#[utoipa::path(
    get,
    path = "/api/rescue-teams/available",
    tag = RESCUE_TEAM_TAG,
    params(
        ("specialization" = Option<String>, Query, description = "Filter by specialization"),
        ("province_city" = Option<String>, Query, description = "Filter by province or city")
    ),
    responses(
        (status = 200, description = "Available rescue teams", body = Vec<RescueTeamDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rescue_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RescueTeamQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(TRIAGE_ROLES)
        .await?;

    let teams = RescueTeamService::new(&state.db)
        .get_available(query.filter()?)
        .await?;

    let teams: Vec<RescueTeamDto> = teams.into_iter().map(RescueTeam::into_dto).collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Get a rescue team by id.
///
/// # Access Control
/// - `coordinator`, `admin`
#[utoipa::path(
    get,
    path = "/api/rescue-teams/{id}",
    tag = RESCUE_TEAM_TAG,
    params(("id" = Uuid, Path, description = "Rescue team id")),
    responses(
        (status = 200, description = "Rescue team", body = RescueTeamDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rescue_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(TRIAGE_ROLES)
        .await?;

    let team = RescueTeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Update a rescue team.
///
/// Only the whitelisted team fields can be changed; other keys are ignored.
///
/// # Access Control
/// - `admin`
#[utoipa::path(
    put,
    path = "/api/rescue-teams/{id}",
    tag = RESCUE_TEAM_TAG,
    params(("id" = Uuid, Path, description = "Rescue team id")),
    request_body = UpdateRescueTeamDto,
    responses(
        (status = 200, description = "Updated rescue team", body = RescueTeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue team not found", body = ErrorDto),
        (status = 409, description = "Team name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rescue_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRescueTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(ADMIN_ROLES)
        .await?;

    let team = RescueTeamService::new(&state.db)
        .update(id, UpdateRescueTeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Soft-delete a rescue team.
///
/// # Access Control
/// - `admin`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - The team is on a mission
/// - `404 Not Found` - Rescue team not found
#[utoipa::path(
    delete,
    path = "/api/rescue-teams/{id}",
    tag = RESCUE_TEAM_TAG,
    params(("id" = Uuid, Path, description = "Rescue team id")),
    responses(
        (status = 204, description = "Rescue team deleted"),
        (status = 400, description = "Rescue team is on a mission", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rescue_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(ADMIN_ROLES)
        .await?;

    RescueTeamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
