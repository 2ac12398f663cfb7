//! Rescue team availability management.
//!
//! `RescueTeamService` owns team status changes. `set_on_mission` is the only way a
//! team leaves `available` for a mission, and it does so with a compare-and-set so
//! two dispatchers cannot claim the same team.

use chrono::Utc;
use entity::rescue_team::TeamStatus;
use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{rescue_team::RescueTeamRepository, unit_of_work::UnitOfWork},
    error::{conflict::ConflictError, AppError},
    model::{
        pagination::{Page, PageRequest},
        rescue_team::{CreateRescueTeamParams, RescueTeam, RescueTeamFilter, UpdateRescueTeamParams},
    },
};

pub struct RescueTeamService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C> RescueTeamService<'a, C>
where
    C: ConnectionTrait + TransactionTrait<Transaction = DatabaseTransaction>,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a team after validating it and checking that its name is free.
    ///
    /// # Returns
    /// - `Ok(RescueTeam)` - The created team
    /// - `Err(AppError::Validation)` - Missing required field or invalid count
    /// - `Err(AppError::Conflict(DuplicateTeamName))` - A live team already has this name
    pub async fn create(&self, params: CreateRescueTeamParams) -> Result<RescueTeam, AppError> {
        let team = params.validate()?;

        let created = UnitOfWork::new(self.db)
            .run(move |txn| {
                Box::pin(async move {
                    let repo = RescueTeamRepository::new(txn);

                    if repo.find_live_by_name(&team.name, None).await?.is_some() {
                        return Err(ConflictError::DuplicateTeamName(team.name).into());
                    }

                    let name = team.name.clone();
                    repo.create(team, Utc::now())
                        .await
                        .map_err(|err| map_duplicate_name(err, name))
                })
            })
            .await?;

        tracing::info!(team_id = %created.id, name = %created.name, "Created rescue team");

        Ok(created)
    }

    /// Gets one page of teams, most recently created first.
    pub async fn get_paginated(
        &self,
        filter: RescueTeamFilter,
        page: PageRequest,
    ) -> Result<Page<RescueTeam>, AppError> {
        let (teams, total) = RescueTeamRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Page::new(teams, page, total))
    }

    /// Gets all available teams in creation order, so the longest-waiting team comes first.
    pub async fn get_available(&self, filter: RescueTeamFilter) -> Result<Vec<RescueTeam>, AppError> {
        Ok(RescueTeamRepository::new(self.db)
            .get_available(&filter)
            .await?)
    }

    /// Gets a live team by id.
    ///
    /// # Returns
    /// - `Ok(RescueTeam)` - Team found
    /// - `Err(AppError::NotFound)` - Missing or soft-deleted
    pub async fn get_by_id(&self, id: Uuid) -> Result<RescueTeam, AppError> {
        RescueTeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    /// Applies a whitelisted patch to a team.
    ///
    /// Renaming onto the name of another live team is a conflict.
    ///
    /// # Returns
    /// - `Ok(RescueTeam)` - The updated team
    /// - `Err(AppError::Validation)` - Blank text field or invalid count
    /// - `Err(AppError::NotFound)` - Missing or soft-deleted
    /// - `Err(AppError::Conflict(DuplicateTeamName))` - Name taken by another team
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateRescueTeamParams,
    ) -> Result<RescueTeam, AppError> {
        let params = params.validate()?;

        let updated = UnitOfWork::new(self.db)
            .run(move |txn| {
                Box::pin(async move {
                    let repo = RescueTeamRepository::new(txn);

                    let name = params.name.clone();
                    if let Some(name) = &name {
                        if repo.find_live_by_name(name, Some(id)).await?.is_some() {
                            return Err(ConflictError::DuplicateTeamName(name.clone()).into());
                        }
                    }

                    repo.update(id, params, Utc::now())
                        .await
                        .map_err(|err| map_duplicate_name(err, name.unwrap_or_default()))?
                        .ok_or_else(|| team_not_found(id))
                })
            })
            .await?;

        tracing::info!(team_id = %id, status = ?updated.status, "Updated rescue team");

        Ok(updated)
    }

    /// Soft-deletes a team unless it is on a mission.
    ///
    /// # Returns
    /// - `Ok(())` - The team was soft-deleted
    /// - `Err(AppError::NotFound)` - Missing or already deleted
    /// - `Err(AppError::Conflict(TeamOnMission))` - The team is on a mission
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = RescueTeamRepository::new(self.db);

        if repo.soft_delete_unless_on_mission(id, Utc::now()).await? {
            tracing::info!(team_id = %id, "Deleted rescue team");
            return Ok(());
        }

        match repo.find_by_id(id).await? {
            None => Err(team_not_found(id)),
            Some(_) => {
                tracing::debug!(team_id = %id, "Refused to delete rescue team on mission");
                Err(ConflictError::TeamOnMission(id).into())
            }
        }
    }

    /// Claims an available team for a mission.
    ///
    /// Succeeds only if the team is `available` at the moment of the write.
    ///
    /// # Returns
    /// - `Ok(())` - The team is now `on_mission`
    /// - `Err(AppError::NotFound)` - Missing or soft-deleted
    /// - `Err(AppError::Conflict(TeamNotAvailable))` - The team is not `available`
    pub async fn set_on_mission(&self, id: Uuid) -> Result<(), AppError> {
        let repo = RescueTeamRepository::new(self.db);

        let claimed = repo
            .transition_status(id, TeamStatus::Available, TeamStatus::OnMission, Utc::now())
            .await?;
        if claimed {
            return Ok(());
        }

        match repo.find_by_id(id).await? {
            None => Err(team_not_found(id)),
            Some(_) => Err(ConflictError::TeamNotAvailable(id).into()),
        }
    }

    /// Returns a team to `available` only while it is still `on_mission`.
    ///
    /// # Returns
    /// - `Ok(true)` - The team was on a mission and is now `available`
    /// - `Ok(false)` - The team is missing, deleted, or not on a mission; nothing changed
    pub async fn release_from_mission(&self, id: Uuid) -> Result<bool, AppError> {
        let released = RescueTeamRepository::new(self.db)
            .transition_status(id, TeamStatus::OnMission, TeamStatus::Available, Utc::now())
            .await?;

        Ok(released)
    }

    /// Returns a team to `available`, whatever its current status.
    ///
    /// # Returns
    /// - `Ok(())` - The team is now `available`
    /// - `Err(AppError::NotFound)` - Missing or soft-deleted
    pub async fn set_available(&self, id: Uuid) -> Result<(), AppError> {
        let updated = RescueTeamRepository::new(self.db)
            .set_status(id, TeamStatus::Available, Utc::now())
            .await?;

        if !updated {
            return Err(team_not_found(id));
        }

        Ok(())
    }
}

fn team_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Rescue team {} not found", id))
}

/// Translates a unique violation on the live name index into a conflict.
fn map_duplicate_name(err: DbErr, name: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ConflictError::DuplicateTeamName(name).into(),
        _ => err.into(),
    }
}
