use entity::{
    rescue_request::{LocationType, RequestCategory, RequestStatus},
    rescue_team::TeamStatus,
    user::UserRole,
};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    error::{conflict::ConflictError, AppError},
    model::{rescue_request::CreateRescueRequestParams, rescue_team::CreateRescueTeamParams},
};

mod rescue_request;

fn gps_request_params() -> CreateRescueRequestParams {
    CreateRescueRequestParams {
        category: Some(RequestCategory::Rescue),
        province_city: Some("Hue".to_string()),
        phone_number: Some("0900000000".to_string()),
        description: Some("Water rising fast, three people on the roof".to_string()),
        num_people: Some(3),
        location_type: Some(LocationType::Gps),
        latitude: Some(16.46),
        longitude: Some(107.59),
        ..Default::default()
    }
}

fn team_params(name: &str) -> CreateRescueTeamParams {
    CreateRescueTeamParams {
        name: Some(name.to_string()),
        leader_name: Some("Nguyen Van A".to_string()),
        phone_number: Some("0912345678".to_string()),
        province_city: Some("Hue".to_string()),
        ..Default::default()
    }
}
