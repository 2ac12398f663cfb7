//! Rescue team factory for creating test team entities.
//!
//! This module provides factory methods for creating rescue team entities with
//! sensible defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::rescue_team::{TeamSpecialization, TeamStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test rescue teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::rescue_team::RescueTeamFactory;
///
/// let team = RescueTeamFactory::new(&db)
///     .name("Medics North")
///     .specialization(TeamSpecialization::Medical)
///     .status(TeamStatus::Unavailable)
///     .build()
///     .await?;
/// ```
pub struct RescueTeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    province_city: String,
    specialization: TeamSpecialization,
    status: TeamStatus,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> RescueTeamFactory<'a> {
    /// Creates a new RescueTeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - province_city: `"HCMC"`
    /// - specialization: `General`
    /// - status: `Available`
    /// - created_at: now
    /// - deleted_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RescueTeamFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            province_city: "HCMC".to_string(),
            specialization: TeamSpecialization::General,
            status: TeamStatus::Available,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the province or city the team operates in.
    pub fn province_city(mut self, province_city: impl Into<String>) -> Self {
        self.province_city = province_city.into();
        self
    }

    /// Sets the team specialization.
    pub fn specialization(mut self, specialization: TeamSpecialization) -> Self {
        self.specialization = specialization;
        self
    }

    /// Sets the team status.
    pub fn status(mut self, status: TeamStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, used to control list ordering in tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the team as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the rescue team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rescue_team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rescue_team::Model, DbErr> {
        entity::rescue_team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            leader_name: ActiveValue::Set("Team Leader".to_string()),
            phone_number: ActiveValue::Set("0911111111".to_string()),
            specialization: ActiveValue::Set(self.specialization),
            capacity: ActiveValue::Set(5),
            current_members: ActiveValue::Set(0),
            status: ActiveValue::Set(self.status),
            province_city: ActiveValue::Set(self.province_city),
            equipment: ActiveValue::Set(serde_json::json!([])),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available team with default values.
///
/// Shorthand for `RescueTeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::rescue_team::Model, DbErr> {
    RescueTeamFactory::new(db).build().await
}
