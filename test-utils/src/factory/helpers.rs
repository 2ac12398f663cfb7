//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities in a specific lifecycle arrangement.

use entity::{rescue_request::RequestStatus, rescue_team::TeamStatus};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a coordinator, an available team and an approved request.
///
/// This is the starting point for assignment tests: the request is in
/// `pending_verification` and the team is `available`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((coordinator, team, request))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_assignable_request(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::rescue_team::Model,
        entity::rescue_request::Model,
    ),
    DbErr,
> {
    let coordinator = crate::factory::user::create_coordinator(db).await?;
    let team = crate::factory::rescue_team::create_team(db).await?;
    let request = crate::factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::PendingVerification)
        .verified_by(Some(coordinator.id))
        .build()
        .await?;

    Ok((coordinator, team, request))
}

/// Creates a coordinator, a team on mission and the request it is working.
///
/// The pair is consistent: the request is `on_mission` with `assigned_team_id`
/// pointing at the team, and the team is `on_mission`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((coordinator, team, request))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_mission(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::rescue_team::Model,
        entity::rescue_request::Model,
    ),
    DbErr,
> {
    let coordinator = crate::factory::user::create_coordinator(db).await?;
    let team = crate::factory::rescue_team::RescueTeamFactory::new(db)
        .status(TeamStatus::OnMission)
        .build()
        .await?;
    let request = crate::factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::OnMission)
        .verified_by(Some(coordinator.id))
        .assigned_team(team.id, coordinator.id)
        .build()
        .await?;

    Ok((coordinator, team, request))
}
