use chrono::{Duration, Utc};
use entity::{
    rescue_request::{LocationType, RequestCategory, RequestStatus},
    rescue_team::{TeamSpecialization, TeamStatus},
    user::UserRole,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::model::{
    rescue_request::NewRescueRequest, rescue_team::NewRescueTeam,
};


fn new_team(name: &str) -> NewRescueTeam {
    NewRescueTeam {
        name: name.to_string(),
        leader_name: "Tran Van B".to_string(),
        phone_number: "0911111111".to_string(),
        specialization: TeamSpecialization::Medical,
        capacity: 8,
        current_members: 6,
        status: TeamStatus::Available,
        province_city: "Hue".to_string(),
        equipment: vec!["stretcher".to_string(), "first aid kit".to_string()],
        notes: None,
    }
}

fn new_gps_request() -> NewRescueRequest {
    NewRescueRequest {
        category: RequestCategory::Rescue,
        province_city: "Hue".to_string(),
        phone_number: "0900000000".to_string(),
        description: "Family of four stranded on the roof".to_string(),
        num_people: 4,
        priority: None,
        location_type: LocationType::Gps,
        latitude: Some(16.46),
        longitude: Some(107.59),
        address: None,
        media_urls: vec!["https://cdn.example.org/roof.jpg".to_string()],
        created_by: None,
    }
}
