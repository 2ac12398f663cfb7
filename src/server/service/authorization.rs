//! Role-based capability checks.
//!
//! `Authorizer::require_role` is applied once at the entry of each guarded
//! lifecycle operation. `ensure_role` is the pure check shared with the HTTP
//! auth guard.

use entity::user::UserRole;
use sea_orm::{ActiveEnum, ConnectionTrait};
use uuid::Uuid;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Roles allowed to triage requests and dispatch teams.
pub const TRIAGE_ROLES: &[UserRole] = &[UserRole::Coordinator, UserRole::Admin];

/// Roles allowed to manage teams, users and deletions.
pub const ADMIN_ROLES: &[UserRole] = &[UserRole::Admin];

/// Fails with `Forbidden` unless the user's role is in `allowed`.
///
/// An empty `allowed` slice accepts any role.
pub fn ensure_role(user: &User, allowed: &[UserRole]) -> Result<(), AppError> {
    if allowed.is_empty() || allowed.contains(&user.role) {
        return Ok(());
    }

    let allowed = allowed
        .iter()
        .map(|role| role.to_value())
        .collect::<Vec<_>>()
        .join(" or ");

    Err(AppError::Forbidden(format!(
        "Role '{}' is not permitted to perform this action, requires {}",
        user.role.to_value(),
        allowed
    )))
}

pub struct Authorizer<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Authorizer<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves the actor and checks that its role is allowed.
    ///
    /// # Arguments
    /// - `actor_id` - Id of the user performing the operation
    /// - `allowed` - Roles permitted for the operation
    ///
    /// # Returns
    /// - `Ok(User)` - The resolved actor
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Forbidden)` - The actor's role is not allowed
    pub async fn require_role(
        &self,
        actor_id: Uuid,
        allowed: &[UserRole],
    ) -> Result<User, AppError> {
        let actor = UserRepository::new(self.db)
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", actor_id)))?;

        ensure_role(&actor, allowed)?;

        Ok(actor)
    }
}
