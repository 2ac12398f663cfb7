use chrono::{DateTime, Utc};
use entity::rescue_team::{TeamSpecialization, TeamStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::api::PaginationDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateRescueTeamDto {
    pub name: Option<String>,
    pub leader_name: Option<String>,
    pub phone_number: Option<String>,
    #[schema(value_type = Option<String>, example = "general")]
    pub specialization: Option<TeamSpecialization>,
    pub capacity: Option<i32>,
    pub current_members: Option<i32>,
    #[schema(value_type = Option<String>, example = "available")]
    pub status: Option<TeamStatus>,
    pub province_city: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Partial update of a rescue team.
///
/// Only these fields can be patched; any other key in the body is ignored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateRescueTeamDto {
    pub name: Option<String>,
    pub leader_name: Option<String>,
    pub phone_number: Option<String>,
    #[schema(value_type = Option<String>, example = "medical")]
    pub specialization: Option<TeamSpecialization>,
    pub capacity: Option<i32>,
    pub current_members: Option<i32>,
    #[schema(value_type = Option<String>, example = "unavailable")]
    pub status: Option<TeamStatus>,
    pub province_city: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RescueTeamDto {
    pub id: Uuid,
    pub name: String,
    pub leader_name: String,
    pub phone_number: String,
    #[schema(value_type = String, example = "general")]
    pub specialization: TeamSpecialization,
    pub capacity: i32,
    pub current_members: i32,
    #[schema(value_type = String, example = "available")]
    pub status: TeamStatus,
    pub province_city: String,
    pub equipment: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedRescueTeamsDto {
    pub teams: Vec<RescueTeamDto>,
    pub pagination: PaginationDto,
}
