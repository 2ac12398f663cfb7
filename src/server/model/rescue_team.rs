//! Rescue team domain models and parameters.

use chrono::{DateTime, Utc};
use entity::rescue_team::{TeamSpecialization, TeamStatus};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    model::rescue_team::{
        CreateRescueTeamDto, PaginatedRescueTeamsDto, RescueTeamDto, UpdateRescueTeamDto,
    },
    server::{error::AppError, model::pagination::Page, util::parse::non_blank},
};

pub const DEFAULT_CAPACITY: i32 = 5;

/// Rescue team as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RescueTeam {
    pub id: Uuid,
    pub name: String,
    pub leader_name: String,
    pub phone_number: String,
    pub specialization: TeamSpecialization,
    pub capacity: i32,
    pub current_members: i32,
    pub status: TeamStatus,
    pub province_city: String,
    pub equipment: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RescueTeam {
    /// Converts an entity model to a rescue team domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(RescueTeam)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored `equipment` is not a JSON array of strings
    pub fn from_entity(entity: entity::rescue_team::Model) -> Result<Self, DbErr> {
        let equipment: Vec<String> = serde_json::from_value(entity.equipment).map_err(|e| {
            DbErr::Custom(format!(
                "Invalid equipment stored for rescue team {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            leader_name: entity.leader_name,
            phone_number: entity.phone_number,
            specialization: entity.specialization,
            capacity: entity.capacity,
            current_members: entity.current_members,
            status: entity.status,
            province_city: entity.province_city,
            equipment,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> RescueTeamDto {
        RescueTeamDto {
            id: self.id,
            name: self.name,
            leader_name: self.leader_name,
            phone_number: self.phone_number,
            specialization: self.specialization,
            capacity: self.capacity,
            current_members: self.current_members,
            status: self.status,
            province_city: self.province_city,
            equipment: self.equipment,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Submitted values for a new rescue team, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct CreateRescueTeamParams {
    pub name: Option<String>,
    pub leader_name: Option<String>,
    pub phone_number: Option<String>,
    pub specialization: Option<TeamSpecialization>,
    pub capacity: Option<i32>,
    pub current_members: Option<i32>,
    pub status: Option<TeamStatus>,
    pub province_city: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Validated rescue team with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRescueTeam {
    pub name: String,
    pub leader_name: String,
    pub phone_number: String,
    pub specialization: TeamSpecialization,
    pub capacity: i32,
    pub current_members: i32,
    pub status: TeamStatus,
    pub province_city: String,
    pub equipment: Vec<String>,
    pub notes: Option<String>,
}

impl CreateRescueTeamParams {
    pub fn from_dto(dto: CreateRescueTeamDto) -> Self {
        Self {
            name: dto.name,
            leader_name: dto.leader_name,
            phone_number: dto.phone_number,
            specialization: dto.specialization,
            capacity: dto.capacity,
            current_members: dto.current_members,
            status: dto.status,
            province_city: dto.province_city,
            equipment: dto.equipment,
            notes: dto.notes,
        }
    }

    /// Validates required fields and applies defaults.
    ///
    /// Defaults: specialization `general`, capacity 5, current_members 0,
    /// status `available`, no equipment.
    ///
    /// # Returns
    /// - `Ok(NewRescueTeam)` - All rules hold
    /// - `Err(AppError::Validation)` - A required field is blank or a count is out of range
    pub fn validate(self) -> Result<NewRescueTeam, AppError> {
        let name = non_blank(self.name).ok_or_else(|| required("name"))?;
        let leader_name = non_blank(self.leader_name).ok_or_else(|| required("leader_name"))?;
        let phone_number = non_blank(self.phone_number).ok_or_else(|| required("phone_number"))?;
        let province_city =
            non_blank(self.province_city).ok_or_else(|| required("province_city"))?;

        let capacity = self.capacity.unwrap_or(DEFAULT_CAPACITY);
        let current_members = self.current_members.unwrap_or(0);
        validate_counts(Some(capacity), Some(current_members))?;

        Ok(NewRescueTeam {
            name,
            leader_name,
            phone_number,
            specialization: self.specialization.unwrap_or(TeamSpecialization::General),
            capacity,
            current_members,
            status: self.status.unwrap_or(TeamStatus::Available),
            province_city,
            equipment: self.equipment.unwrap_or_default(),
            notes: self.notes,
        })
    }
}

/// Whitelisted patch of a rescue team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRescueTeamParams {
    pub name: Option<String>,
    pub leader_name: Option<String>,
    pub phone_number: Option<String>,
    pub specialization: Option<TeamSpecialization>,
    pub capacity: Option<i32>,
    pub current_members: Option<i32>,
    pub status: Option<TeamStatus>,
    pub province_city: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl UpdateRescueTeamParams {
    pub fn from_dto(dto: UpdateRescueTeamDto) -> Self {
        Self {
            name: dto.name,
            leader_name: dto.leader_name,
            phone_number: dto.phone_number,
            specialization: dto.specialization,
            capacity: dto.capacity,
            current_members: dto.current_members,
            status: dto.status,
            province_city: dto.province_city,
            equipment: dto.equipment,
            notes: dto.notes,
        }
    }

    /// Trims provided text fields and checks the same rules as creation.
    ///
    /// A text field that is present must not be blank; absent fields are left
    /// untouched by the update.
    pub fn validate(self) -> Result<Self, AppError> {
        validate_counts(self.capacity, self.current_members)?;

        Ok(Self {
            name: present_non_blank(self.name, "name")?,
            leader_name: present_non_blank(self.leader_name, "leader_name")?,
            phone_number: present_non_blank(self.phone_number, "phone_number")?,
            province_city: present_non_blank(self.province_city, "province_city")?,
            ..self
        })
    }
}

fn present_non_blank(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => non_blank(Some(v))
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{} must not be blank", field))),
    }
}

fn validate_counts(capacity: Option<i32>, current_members: Option<i32>) -> Result<(), AppError> {
    if capacity.is_some_and(|c| c < 1) {
        return Err(AppError::Validation(
            "capacity must be at least 1".to_string(),
        ));
    }
    if current_members.is_some_and(|m| m < 0) {
        return Err(AppError::Validation(
            "current_members must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn required(field: &str) -> AppError {
    AppError::Validation(format!("{} is required", field))
}

/// Optional equality filters for listing rescue teams.
///
/// `status` is ignored when listing available teams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RescueTeamFilter {
    pub status: Option<TeamStatus>,
    pub specialization: Option<TeamSpecialization>,
    pub province_city: Option<String>,
}

impl Page<RescueTeam> {
    pub fn into_dto(self) -> PaginatedRescueTeamsDto {
        let pagination = self.pagination_dto();

        PaginatedRescueTeamsDto {
            teams: self.items.into_iter().map(RescueTeam::into_dto).collect(),
            pagination,
        }
    }
}
