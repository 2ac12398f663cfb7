//! User domain models and parameters.
//!
//! Users are the callers known to the identity gateway. Each carries a role that
//! gates triage and administration, and an opaque bearer credential that is only
//! ever revealed once, when the user is provisioned.

use chrono::{DateTime, Utc};
use entity::user::UserRole;
use uuid::Uuid;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{error::AppError, util::parse::non_blank},
};

/// Resolved caller identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The access token is left behind in the entity.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
        }
    }
}

/// Parameters for provisioning a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            role: dto.role,
        }
    }

    /// Trims and checks the email and name.
    ///
    /// The email is lowercased so lookups and the uniqueness constraint are
    /// case-insensitive.
    pub fn validate(self) -> Result<Self, AppError> {
        let email = non_blank(Some(self.email))
            .map(|e| e.to_lowercase())
            .filter(|e| looks_like_email(e))
            .ok_or_else(|| AppError::Validation("email must be a valid address".to_string()))?;
        let name = non_blank(Some(self.name))
            .ok_or_else(|| AppError::Validation("name is required".to_string()))?;

        Ok(Self {
            email,
            name,
            role: self.role,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}

/// A user about to be persisted, credential included.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub access_token: String,
}
