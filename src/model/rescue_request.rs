use chrono::{DateTime, Utc};
use entity::rescue_request::{LocationType, RequestCategory, RequestPriority, RequestStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::api::PaginationDto;

/// Citizen submission of a new rescue request.
///
/// Required fields are optional here so that missing values surface as
/// validation errors from the service layer rather than as parse failures.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateRescueRequestDto {
    #[schema(value_type = Option<String>, example = "rescue")]
    pub category: Option<RequestCategory>,
    pub province_city: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
    pub num_people: Option<i32>,
    #[schema(value_type = Option<String>, example = "high")]
    pub priority: Option<RequestPriority>,
    #[schema(value_type = Option<String>, example = "gps")]
    pub location_type: Option<LocationType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RescueRequestDto {
    pub id: Uuid,
    #[schema(value_type = String, example = "rescue")]
    pub category: RequestCategory,
    pub province_city: String,
    pub phone_number: String,
    pub description: String,
    pub num_people: i32,
    #[schema(value_type = Option<String>, example = "urgent")]
    pub priority: Option<RequestPriority>,
    #[schema(value_type = String, example = "new")]
    pub status: RequestStatus,
    #[schema(value_type = String, example = "gps")]
    pub location_type: LocationType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub media_urls: Vec<String>,
    pub created_by: Option<Uuid>,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub assigned_by: Option<Uuid>,
    pub assigned_team_id: Option<Uuid>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Administrative correction of a rescue request.
///
/// Only these fields can be patched; any other key in the body is ignored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateRescueRequestDto {
    #[schema(value_type = Option<String>, example = "pending_verification")]
    pub status: Option<RequestStatus>,
    #[schema(value_type = Option<String>, example = "high")]
    pub priority: Option<RequestPriority>,
    pub notes: Option<String>,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ApproveRescueRequestDto {
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct RejectRescueRequestDto {
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct AssignTeamDto {
    pub team_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CompleteMissionDto {
    pub completion_notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedRescueRequestsDto {
    pub requests: Vec<RescueRequestDto>,
    pub pagination: PaginationDto,
}

/// Request counts over all non-deleted requests.
///
/// Every status and category is present, with zero for empty groups.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RescueRequestStatisticsDto {
    pub total: u64,
    pub by_status: BTreeMap<String, u64>,
    pub by_category: BTreeMap<String, u64>,
}
