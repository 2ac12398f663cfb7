//! Rescue request factory for creating test request entities.
//!
//! Requests are inserted directly, so a test can start from any lifecycle
//! state without walking through the service layer first.

use chrono::{DateTime, Utc};
use entity::rescue_request::{LocationType, RequestCategory, RequestStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test rescue requests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::rescue_request::RescueRequestFactory;
///
/// let request = RescueRequestFactory::new(&db)
///     .category(RequestCategory::Supplies)
///     .status(RequestStatus::PendingVerification)
///     .build()
///     .await?;
/// ```
pub struct RescueRequestFactory<'a> {
    db: &'a DatabaseConnection,
    category: RequestCategory,
    province_city: String,
    status: RequestStatus,
    created_by: Option<Uuid>,
    verified_by: Option<Uuid>,
    assigned_team_id: Option<Uuid>,
    assigned_by: Option<Uuid>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> RescueRequestFactory<'a> {
    /// Creates a new RescueRequestFactory with default values.
    ///
    /// Defaults:
    /// - category: `Rescue`
    /// - province_city: `"HCMC"`
    /// - status: `New`
    /// - location: GPS at 10.77, 106.70
    /// - no creator, verifier or assignment
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RescueRequestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            category: RequestCategory::Rescue,
            province_city: "HCMC".to_string(),
            status: RequestStatus::New,
            created_by: None,
            verified_by: None,
            assigned_team_id: None,
            assigned_by: None,
            notes: None,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Sets the request category.
    pub fn category(mut self, category: RequestCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the province or city of the request.
    pub fn province_city(mut self, province_city: impl Into<String>) -> Self {
        self.province_city = province_city.into();
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creating user.
    pub fn created_by(mut self, created_by: Option<Uuid>) -> Self {
        self.created_by = created_by;
        self
    }

    /// Sets the verifying user.
    pub fn verified_by(mut self, verified_by: Option<Uuid>) -> Self {
        self.verified_by = verified_by;
        self
    }

    /// Sets the assigned team and the user who assigned it.
    pub fn assigned_team(mut self, team_id: Uuid, assigned_by: Uuid) -> Self {
        self.assigned_team_id = Some(team_id);
        self.assigned_by = Some(assigned_by);
        self
    }

    /// Sets the audit notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the creation timestamp, used to control list ordering in tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the request as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the rescue request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rescue_request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rescue_request::Model, DbErr> {
        let assigned_at = self.assigned_team_id.map(|_| Utc::now());
        let verified_at = self.verified_by.map(|_| Utc::now());

        entity::rescue_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            category: ActiveValue::Set(self.category),
            province_city: ActiveValue::Set(self.province_city),
            phone_number: ActiveValue::Set("0900000000".to_string()),
            description: ActiveValue::Set("trapped on roof, flooding".to_string()),
            num_people: ActiveValue::Set(1),
            priority: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            location_type: ActiveValue::Set(LocationType::Gps),
            latitude: ActiveValue::Set(Some(10.77)),
            longitude: ActiveValue::Set(Some(106.70)),
            address: ActiveValue::Set(None),
            media_urls: ActiveValue::Set(serde_json::json!([])),
            created_by: ActiveValue::Set(self.created_by),
            verified_by: ActiveValue::Set(self.verified_by),
            verified_at: ActiveValue::Set(verified_at),
            assigned_by: ActiveValue::Set(self.assigned_by),
            assigned_team_id: ActiveValue::Set(self.assigned_team_id),
            assigned_at: ActiveValue::Set(assigned_at),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a new-status GPS request with default values.
///
/// Shorthand for `RescueRequestFactory::new(db).build().await`.
pub async fn create_request(
    db: &DatabaseConnection,
) -> Result<entity::rescue_request::Model, DbErr> {
    RescueRequestFactory::new(db).build().await
}
