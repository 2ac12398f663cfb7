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
        rescue_request::{
            ApproveRescueRequestDto, AssignTeamDto, CompleteMissionDto, CreateRescueRequestDto,
            PaginatedRescueRequestsDto, RejectRescueRequestDto, RescueRequestDto,
            RescueRequestStatisticsDto, UpdateRescueRequestDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::PageRequest,
            rescue_request::{
                CreateRescueRequestParams, RescueRequestFilter, UpdateRescueRequestParams,
            },
        },
        service::{
            authorization::{ADMIN_ROLES, TRIAGE_ROLES},
            rescue_request::RescueRequestService,
        },
        state::AppState,
        util::parse::{non_blank, parse_enum_filter},
    },
};

/// Tag for grouping rescue request endpoints in OpenAPI documentation
pub static RESCUE_REQUEST_TAG: &str = "rescue-request";

/// Query string of the request list.
///
/// Values are kept as raw strings so unusable pagination values fall back to
/// defaults instead of rejecting the request.
#[derive(Deserialize, Default)]
pub struct RescueRequestQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub province_city: Option<String>,
    pub priority: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl RescueRequestQuery {
    fn filter(&self) -> Result<RescueRequestFilter, AppError> {
        Ok(RescueRequestFilter {
            status: parse_enum_filter("status", self.status.as_deref())?,
            category: parse_enum_filter("category", self.category.as_deref())?,
            province_city: non_blank(self.province_city.clone()),
            priority: parse_enum_filter("priority", self.priority.as_deref())?,
        })
    }

    fn page(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Submit a new rescue request.
///
/// Anyone may submit, with or without a bearer credential. When a credential is
/// sent, its user is recorded as the creator.
///
/// # Access Control
/// - Public; an invalid credential is still rejected
///
/// # Returns
/// - `201 Created` - The stored request with status `new`
/// - `400 Bad Request` - Missing field, bad location or out-of-range value
/// - `401 Unauthorized` - Credential sent but unknown
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/rescue-requests",
    tag = RESCUE_REQUEST_TAG,
    request_body = CreateRescueRequestDto,
    responses(
        (status = 201, description = "Created rescue request", body = RescueRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 401, description = "Unknown bearer credential", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rescue_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRescueRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).optional().await?;

    let params = CreateRescueRequestParams::from_dto(payload, caller.map(|user| user.id));
    let request = RescueRequestService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List rescue requests, most recent first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - One page of requests with pagination metadata
/// - `400 Bad Request` - Unknown status, category or priority filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rescue-requests",
    tag = RESCUE_REQUEST_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("province_city" = Option<String>, Query, description = "Filter by province or city"),
        ("priority" = Option<String>, Query, description = "Filter by priority"),
        ("page" = Option<u64>, Query, description = "1-based page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated rescue requests", body = PaginatedRescueRequestsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rescue_requests(
    State(state): State<AppState>,
    Query(query): Query<RescueRequestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = RescueRequestService::new(&state.db)
        .get_paginated(query.filter()?, query.page())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Count rescue requests by status and by category.
///
/// # Access Control
/// - `coordinator`, `admin`
///
/// # Returns
/// - `200 OK` - Totals with every status and category present
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is a citizen
#[utoipa::path(
    get,
    path = "/api/rescue-requests/statistics",
    tag = RESCUE_REQUEST_TAG,
    responses(
        (status = 200, description = "Request statistics", body = RescueRequestStatisticsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rescue_request_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(TRIAGE_ROLES)
        .await?;

    let statistics = RescueRequestService::new(&state.db).statistics().await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}

/// Get a rescue request by id.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/rescue-requests/{id}",
    tag = RESCUE_REQUEST_TAG,
    params(("id" = Uuid, Path, description = "Rescue request id")),
    responses(
        (status = 200, description = "Rescue request", body = RescueRequestDto),
        (status = 404, description = "Rescue request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rescue_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let request = RescueRequestService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Correct a rescue request.
///
/// Only `status`, `priority`, `notes`, `verified_by` and `verified_at` can be
/// changed; other keys are ignored. Status may only move along an edge that
/// does not involve a team.
///
/// # Access Control
/// - `coordinator`, `admin`
///
/// # Returns
/// - `200 OK` - The updated request
/// - `400 Bad Request` - Status change not allowed
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is a citizen
/// - `404 Not Found` - Rescue request not found
#[utoipa::path(
    put,
    path = "/api/rescue-requests/{id}",
    tag = RESCUE_REQUEST_TAG,
    params(("id" = Uuid, Path, description = "Rescue request id")),
    request_body = UpdateRescueRequestDto,
    responses(
        (status = 200, description = "Updated rescue request", body = RescueRequestDto),
        (status = 400, description = "Status change not allowed", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rescue_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRescueRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(TRIAGE_ROLES)
        .await?;

    let request = RescueRequestService::new(&state.db)
        .update(id, user.id, UpdateRescueRequestParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Soft-delete a rescue request.
///
/// A request on a mission releases its team.
///
/// # Access Control
/// - `admin`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Rescue request not found
#[utoipa::path(
    delete,
    path = "/api/rescue-requests/{id}",
    tag = RESCUE_REQUEST_TAG,
    params(("id" = Uuid, Path, description = "Rescue request id")),
    responses(
        (status = 204, description = "Rescue request deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rescue_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(ADMIN_ROLES)
        .await?;

    RescueRequestService::new(&state.db)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Approve a new rescue request.
///
/// # Access Control
/// - `coordinator`, `admin`
///
/// # Returns
/// - `200 OK` - Request is now `pending_verification`
/// - `400 Bad Request` - Request is not `new`, or changed concurrently
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is a citizen
/// - `404 Not Found` - Rescue request not found
#[utoipa::path(
    post,
    path = "/api/rescue-requests/{id}/approve",
    tag = RESCUE_REQUEST_TAG,
    params(("id" = Uuid, Path, description = "Rescue request id")),
    request_body = ApproveRescueRequestDto,
    responses(
        (status = 200, description = "Approved rescue request", body = RescueRequestDto),
        (status = 400, description = "Request is not new", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_rescue_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    payload: Option<Json<ApproveRescueRequestDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();

    let request = RescueRequestService::new(&state.db)
        .approve(id, user.id, payload.notes)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Reject a new rescue request.
///
/// # Access Control
/// - `coordinator`, `admin`
///
/// # Returns
/// - `200 OK` - Request is now `rejected`
/// - `400 Bad Request` - Missing reason, or request is not `new`
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is a citizen
/// - `404 Not Found` - Rescue request not found
#[utoipa::path(
    post,
    path = "/api/rescue-requests/{id}/reject",
    tag = RESCUE_REQUEST_TAG,
    params(("id" = Uuid, Path, description = "Rescue request id")),
    request_body = RejectRescueRequestDto,
    responses(
        (status = 200, description = "Rejected rescue request", body = RescueRequestDto),
        (status = 400, description = "Missing reason or request is not new", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_rescue_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    payload: Option<Json<RejectRescueRequestDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();

    let request = RescueRequestService::new(&state.db)
        .reject(id, user.id, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Assign an available rescue team to a verified request.
///
/// The request and the team move to `on_mission` together.
///
/// # Access Control
/// - `coordinator`, `admin`
///
/// # Returns
/// - `200 OK` - Request is now `on_mission`
/// - `400 Bad Request` - Missing team id, request not `pending_verification`, or team not available
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is a citizen
/// - `404 Not Found` - Rescue request or team not found
#[utoipa::path(
    post,
    path = "/api/rescue-requests/{id}/assign",
    tag = RESCUE_REQUEST_TAG,
    params(("id" = Uuid, Path, description = "Rescue request id")),
    request_body = AssignTeamDto,
    responses(
        (status = 200, description = "Assigned rescue request", body = RescueRequestDto),
        (status = 400, description = "Request or team in the wrong state", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue request or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_rescue_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let team_id = payload
        .team_id
        .ok_or_else(|| AppError::Validation("team_id is required".to_string()))?;

    let request = RescueRequestService::new(&state.db)
        .assign_team(id, team_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Complete a mission and release its team.
///
/// # Access Control
/// - `coordinator`, `admin`
///
/// # Returns
/// - `200 OK` - Request is now `completed`
/// - `400 Bad Request` - Request is not `on_mission`
/// - `401 Unauthorized` - Missing or unknown credential
/// - `403 Forbidden` - Caller is a citizen
/// - `404 Not Found` - Rescue request not found
#[utoipa::path(
    post,
    path = "/api/rescue-requests/{id}/complete",
    tag = RESCUE_REQUEST_TAG,
    params(("id" = Uuid, Path, description = "Rescue request id")),
    request_body = CompleteMissionDto,
    responses(
        (status = 200, description = "Completed rescue request", body = RescueRequestDto),
        (status = 400, description = "Request is not on a mission", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller role not permitted", body = ErrorDto),
        (status = 404, description = "Rescue request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_rescue_mission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    payload: Option<Json<CompleteMissionDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();

    let request = RescueRequestService::new(&state.db)
        .complete_mission(id, user.id, payload.completion_notes)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
