//! Rescue request fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::rescue_request::{self, LocationType, RequestCategory, RequestStatus};
use uuid::Uuid;

/// Default description used by fixture requests.
pub const DEFAULT_DESCRIPTION: &str = "trapped on roof, flooding";

/// Creates a rescue request entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - category: `Rescue`, status: `New`
/// - location: GPS at 10.77, 106.70
/// - media_urls: `["https://media.example.org/1.jpg"]`
///
/// # Returns
/// - `rescue_request::Model` - In-memory request entity
pub fn entity() -> rescue_request::Model {
    let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    rescue_request::Model {
        id: Uuid::nil(),
        category: RequestCategory::Rescue,
        province_city: "HCMC".to_string(),
        phone_number: "0900000000".to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        num_people: 1,
        priority: None,
        status: RequestStatus::New,
        location_type: LocationType::Gps,
        latitude: Some(10.77),
        longitude: Some(106.70),
        address: None,
        media_urls: serde_json::json!(["https://media.example.org/1.jpg"]),
        created_by: None,
        verified_by: None,
        verified_at: None,
        assigned_by: None,
        assigned_team_id: None,
        assigned_at: None,
        notes: None,
        created_at,
        updated_at: created_at,
        deleted_at: None,
    }
}
