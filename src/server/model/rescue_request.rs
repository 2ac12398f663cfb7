//! Rescue request domain models and parameters.
//!
//! `CreateRescueRequestParams` carries submitted values as-is; `validate` turns it
//! into a `NewRescueRequest` that is guaranteed to hold exactly one location form
//! and to satisfy every field rule, so the repository never sees invalid input.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use entity::rescue_request::{LocationType, RequestCategory, RequestPriority, RequestStatus};
use sea_orm::{ActiveEnum, DbErr};
use uuid::Uuid;

use crate::{
    model::rescue_request::{
        CreateRescueRequestDto, PaginatedRescueRequestsDto, RescueRequestDto,
        RescueRequestStatisticsDto, UpdateRescueRequestDto,
    },
    server::{error::AppError, model::pagination::Page, util::parse::non_blank},
};

pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;
pub const DEFAULT_NUM_PEOPLE: i32 = 1;

/// Rescue request as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RescueRequest {
    pub id: Uuid,
    pub category: RequestCategory,
    pub province_city: String,
    pub phone_number: String,
    pub description: String,
    pub num_people: i32,
    pub priority: Option<RequestPriority>,
    pub status: RequestStatus,
    pub location_type: LocationType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub media_urls: Vec<String>,
    pub created_by: Option<Uuid>,
    /// Coordinator or admin who approved or rejected the request.
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub assigned_by: Option<Uuid>,
    /// Set on assignment and kept afterwards as history.
    pub assigned_team_id: Option<Uuid>,
    pub assigned_at: Option<DateTime<Utc>>,
    /// Append-only audit trail of triage actions.
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RescueRequest {
    /// Converts an entity model to a rescue request domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored `media_urls` is not a JSON array of strings
    pub fn from_entity(entity: entity::rescue_request::Model) -> Result<Self, DbErr> {
        let media_urls: Vec<String> = serde_json::from_value(entity.media_urls).map_err(|e| {
            DbErr::Custom(format!(
                "Invalid media_urls stored for rescue request {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            category: entity.category,
            province_city: entity.province_city,
            phone_number: entity.phone_number,
            description: entity.description,
            num_people: entity.num_people,
            priority: entity.priority,
            status: entity.status,
            location_type: entity.location_type,
            latitude: entity.latitude,
            longitude: entity.longitude,
            address: entity.address,
            media_urls,
            created_by: entity.created_by,
            verified_by: entity.verified_by,
            verified_at: entity.verified_at,
            assigned_by: entity.assigned_by,
            assigned_team_id: entity.assigned_team_id,
            assigned_at: entity.assigned_at,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> RescueRequestDto {
        RescueRequestDto {
            id: self.id,
            category: self.category,
            province_city: self.province_city,
            phone_number: self.phone_number,
            description: self.description,
            num_people: self.num_people,
            priority: self.priority,
            status: self.status,
            location_type: self.location_type,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            media_urls: self.media_urls,
            created_by: self.created_by,
            verified_by: self.verified_by,
            verified_at: self.verified_at,
            assigned_by: self.assigned_by,
            assigned_team_id: self.assigned_team_id,
            assigned_at: self.assigned_at,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Submitted values for a new rescue request, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct CreateRescueRequestParams {
    pub category: Option<RequestCategory>,
    pub province_city: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
    pub num_people: Option<i32>,
    pub priority: Option<RequestPriority>,
    pub location_type: Option<LocationType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub media_urls: Vec<String>,
    /// Submitting user, `None` for anonymous submissions.
    pub created_by: Option<Uuid>,
}

/// Location of a request, exactly one of the two forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestLocation<'a> {
    Gps { latitude: f64, longitude: f64 },
    Manual { address: &'a str },
}

/// Validated rescue request ready to be persisted with status `new`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRescueRequest {
    pub category: RequestCategory,
    pub province_city: String,
    pub phone_number: String,
    pub description: String,
    pub num_people: i32,
    pub priority: Option<RequestPriority>,
    pub location_type: LocationType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub media_urls: Vec<String>,
    pub created_by: Option<Uuid>,
}

impl NewRescueRequest {
    pub fn location(&self) -> Option<RequestLocation<'_>> {
        match (self.location_type, self.latitude, self.longitude, &self.address) {
            (LocationType::Gps, Some(latitude), Some(longitude), _) => Some(RequestLocation::Gps {
                latitude,
                longitude,
            }),
            (LocationType::Manual, _, _, Some(address)) => {
                Some(RequestLocation::Manual {
                    address: address.as_str(),
                })
            }
            _ => None,
        }
    }
}

impl CreateRescueRequestParams {
    pub fn from_dto(dto: CreateRescueRequestDto, created_by: Option<Uuid>) -> Self {
        Self {
            category: dto.category,
            province_city: dto.province_city,
            phone_number: dto.phone_number,
            description: dto.description,
            num_people: dto.num_people,
            priority: dto.priority,
            location_type: dto.location_type,
            latitude: dto.latitude,
            longitude: dto.longitude,
            address: dto.address,
            media_urls: dto.media_urls,
            created_by,
        }
    }

    /// Validates submitted values and normalizes them into a `NewRescueRequest`.
    ///
    /// Text fields are trimmed. For `gps` requests the address is dropped, for
    /// `manual` requests the coordinates are dropped.
    ///
    /// # Returns
    /// - `Ok(NewRescueRequest)` - All rules hold
    /// - `Err(AppError::Validation)` - First rule that failed
    pub fn validate(self) -> Result<NewRescueRequest, AppError> {
        let category = self.category.ok_or_else(|| required("category"))?;
        let province_city = non_blank(self.province_city).ok_or_else(|| required("province_city"))?;
        let phone_number = non_blank(self.phone_number).ok_or_else(|| required("phone_number"))?;
        let description = non_blank(self.description).ok_or_else(|| required("description"))?;
        let location_type = self.location_type.ok_or_else(|| required("location_type"))?;

        let description_len = description.chars().count();
        if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&description_len) {
            return Err(AppError::Validation(format!(
                "description must be between {} and {} characters",
                DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
            )));
        }

        let num_people = self.num_people.unwrap_or(DEFAULT_NUM_PEOPLE);
        if num_people < 1 {
            return Err(AppError::Validation(
                "num_people must be at least 1".to_string(),
            ));
        }

        let (latitude, longitude, address) = match location_type {
            LocationType::Gps => {
                let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
                    return Err(AppError::Validation(
                        "latitude and longitude are required for gps location".to_string(),
                    ));
                };
                if !(-90.0..=90.0).contains(&latitude) {
                    return Err(AppError::Validation(
                        "latitude must be between -90 and 90".to_string(),
                    ));
                }
                if !(-180.0..=180.0).contains(&longitude) {
                    return Err(AppError::Validation(
                        "longitude must be between -180 and 180".to_string(),
                    ));
                }
                (Some(latitude), Some(longitude), None)
            }
            LocationType::Manual => {
                let address = non_blank(self.address).ok_or_else(|| {
                    AppError::Validation("address is required for manual location".to_string())
                })?;
                (None, None, Some(address))
            }
        };

        Ok(NewRescueRequest {
            category,
            province_city,
            phone_number,
            description,
            num_people,
            priority: self.priority,
            location_type,
            latitude,
            longitude,
            address,
            media_urls: self.media_urls,
            created_by: self.created_by,
        })
    }
}

fn required(field: &str) -> AppError {
    AppError::Validation(format!("{} is required", field))
}

/// Administrative patch of a rescue request.
///
/// Limited to the correction fields; the lifecycle columns that pair with a team
/// (`assigned_*`) are not reachable from here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRescueRequestParams {
    pub status: Option<RequestStatus>,
    pub priority: Option<RequestPriority>,
    pub notes: Option<String>,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl UpdateRescueRequestParams {
    pub fn from_dto(dto: UpdateRescueRequestDto) -> Self {
        Self {
            status: dto.status,
            priority: dto.priority,
            notes: dto.notes,
            verified_by: dto.verified_by,
            verified_at: dto.verified_at,
        }
    }
}

/// Optional equality filters for listing rescue requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RescueRequestFilter {
    pub status: Option<RequestStatus>,
    pub category: Option<RequestCategory>,
    pub province_city: Option<String>,
    pub priority: Option<RequestPriority>,
}

impl Page<RescueRequest> {
    pub fn into_dto(self) -> PaginatedRescueRequestsDto {
        let pagination = self.pagination_dto();

        PaginatedRescueRequestsDto {
            requests: self.items.into_iter().map(RescueRequest::into_dto).collect(),
            pagination,
        }
    }
}

/// Counts of non-deleted requests, grouped by status and by category.
///
/// Every enum value has an entry, zero when no request matches.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestStatistics {
    pub total: u64,
    pub by_status: Vec<(RequestStatus, u64)>,
    pub by_category: Vec<(RequestCategory, u64)>,
}

impl RequestStatistics {
    pub fn count_for_status(&self, status: RequestStatus) -> u64 {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn into_dto(self) -> RescueRequestStatisticsDto {
        RescueRequestStatisticsDto {
            total: self.total,
            by_status: self
                .by_status
                .into_iter()
                .map(|(status, count)| (status.to_value(), count))
                .collect::<BTreeMap<_, _>>(),
            by_category: self
                .by_category
                .into_iter()
                .map(|(category, count)| (category.to_value(), count))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}
