//! Rescue team fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::rescue_team::{self, TeamSpecialization, TeamStatus};
use uuid::Uuid;

/// Default test team name.
pub const DEFAULT_NAME: &str = "Fixture Team";

/// Default province or city for fixture teams.
pub const DEFAULT_PROVINCE_CITY: &str = "HCMC";

/// Creates a rescue team entity model with default values.
///
/// # Default Values
/// - id: nil UUID
/// - name: `"Fixture Team"`
/// - specialization: `General`, capacity `5`, current_members `0`
/// - status: `Available`
/// - equipment: `["boat", "life jackets"]`
///
/// # Returns
/// - `rescue_team::Model` - In-memory team entity
pub fn entity() -> rescue_team::Model {
    let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    rescue_team::Model {
        id: Uuid::nil(),
        name: DEFAULT_NAME.to_string(),
        leader_name: "Fixture Leader".to_string(),
        phone_number: "0911111111".to_string(),
        specialization: TeamSpecialization::General,
        capacity: 5,
        current_members: 0,
        status: TeamStatus::Available,
        province_city: DEFAULT_PROVINCE_CITY.to_string(),
        equipment: serde_json::json!(["boat", "life jackets"]),
        notes: None,
        created_at,
        updated_at: created_at,
        deleted_at: None,
    }
}
