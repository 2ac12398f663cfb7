//! Rescue team data repository.
//!
//! Status changes go through `transition_status`, a compare-and-set that only
//! matches the row while it still has the expected status. Callers treat zero
//! affected rows as a lost race.

use chrono::{DateTime, Utc};
use entity::rescue_team::TeamStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::{
    pagination::PageRequest,
    rescue_team::{NewRescueTeam, RescueTeam, RescueTeamFilter, UpdateRescueTeamParams},
};

pub struct RescueTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RescueTeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Base query over teams that have not been soft-deleted.
    fn live() -> Select<entity::rescue_team::Entity> {
        entity::prelude::RescueTeam::find()
            .filter(entity::rescue_team::Column::DeletedAt.is_null())
    }

    /// Inserts a new team.
    ///
    /// # Arguments
    /// - `team` - Validated team with defaults applied
    /// - `now` - Creation timestamp, also used for `updated_at`
    ///
    /// # Returns
    /// - `Ok(RescueTeam)` - The created team
    /// - `Err(DbErr)` - Database error, including a unique violation on the live name index
    pub async fn create(&self, team: NewRescueTeam, now: DateTime<Utc>) -> Result<RescueTeam, DbErr> {
        let entity = entity::rescue_team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(team.name),
            leader_name: ActiveValue::Set(team.leader_name),
            phone_number: ActiveValue::Set(team.phone_number),
            specialization: ActiveValue::Set(team.specialization),
            capacity: ActiveValue::Set(team.capacity),
            current_members: ActiveValue::Set(team.current_members),
            status: ActiveValue::Set(team.status),
            province_city: ActiveValue::Set(team.province_city),
            equipment: ActiveValue::Set(serde_json::Value::from(team.equipment)),
            notes: ActiveValue::Set(team.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        RescueTeam::from_entity(entity)
    }

    /// Finds a live team by id.
    ///
    /// # Returns
    /// - `Ok(Some(RescueTeam))` - Team found
    /// - `Ok(None)` - No team with that id, or it was soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RescueTeam>, DbErr> {
        Self::live()
            .filter(entity::rescue_team::Column::Id.eq(id))
            .one(self.db)
            .await?
            .map(RescueTeam::from_entity)
            .transpose()
    }

    /// Finds a live team using `name`, optionally ignoring one team.
    ///
    /// # Arguments
    /// - `name` - Exact team name
    /// - `excluding` - Team to ignore, used when renaming a team
    pub async fn find_live_by_name(
        &self,
        name: &str,
        excluding: Option<Uuid>,
    ) -> Result<Option<RescueTeam>, DbErr> {
        let mut query = Self::live().filter(entity::rescue_team::Column::Name.eq(name));
        if let Some(id) = excluding {
            query = query.filter(entity::rescue_team::Column::Id.ne(id));
        }

        query
            .one(self.db)
            .await?
            .map(RescueTeam::from_entity)
            .transpose()
    }

    /// Gets one page of live teams, most recently created first.
    ///
    /// # Returns
    /// - `Ok((Vec<RescueTeam>, u64))` - The page and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &RescueTeamFilter,
        page: PageRequest,
    ) -> Result<(Vec<RescueTeam>, u64), DbErr> {
        let mut query = Self::live();
        if let Some(status) = filter.status {
            query = query.filter(entity::rescue_team::Column::Status.eq(status));
        }
        query = Self::apply_common_filters(query, filter);

        let paginator = query
            .order_by_desc(entity::rescue_team::Column::CreatedAt)
            .order_by_desc(entity::rescue_team::Column::Id)
            .paginate(self.db, page.limit());

        let total = paginator.num_items().await?;
        let teams = paginator
            .fetch_page(page.page_index())
            .await?
            .into_iter()
            .map(RescueTeam::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((teams, total))
    }

    /// Gets every available live team, longest waiting first.
    ///
    /// `filter.status` is ignored.
    pub async fn get_available(&self, filter: &RescueTeamFilter) -> Result<Vec<RescueTeam>, DbErr> {
        let query = Self::live()
            .filter(entity::rescue_team::Column::Status.eq(TeamStatus::Available));

        Self::apply_common_filters(query, filter)
            .order_by_asc(entity::rescue_team::Column::CreatedAt)
            .order_by_asc(entity::rescue_team::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(RescueTeam::from_entity)
            .collect()
    }

    fn apply_common_filters(
        mut query: Select<entity::rescue_team::Entity>,
        filter: &RescueTeamFilter,
    ) -> Select<entity::rescue_team::Entity> {
        if let Some(specialization) = filter.specialization {
            query = query.filter(entity::rescue_team::Column::Specialization.eq(specialization));
        }
        if let Some(province_city) = &filter.province_city {
            query = query.filter(entity::rescue_team::Column::ProvinceCity.eq(province_city.as_str()));
        }
        query
    }

    /// Applies a whitelisted patch to a live team.
    ///
    /// Fields left as `None` in the patch are not written.
    ///
    /// # Returns
    /// - `Ok(Some(RescueTeam))` - The updated team
    /// - `Ok(None)` - No live team with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateRescueTeamParams,
        now: DateTime<Utc>,
    ) -> Result<Option<RescueTeam>, DbErr> {
        let Some(team) = Self::live()
            .filter(entity::rescue_team::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::rescue_team::ActiveModel = team.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(leader_name) = params.leader_name {
            active_model.leader_name = ActiveValue::Set(leader_name);
        }
        if let Some(phone_number) = params.phone_number {
            active_model.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(specialization) = params.specialization {
            active_model.specialization = ActiveValue::Set(specialization);
        }
        if let Some(capacity) = params.capacity {
            active_model.capacity = ActiveValue::Set(capacity);
        }
        if let Some(current_members) = params.current_members {
            active_model.current_members = ActiveValue::Set(current_members);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(province_city) = params.province_city {
            active_model.province_city = ActiveValue::Set(province_city);
        }
        if let Some(equipment) = params.equipment {
            active_model.equipment = ActiveValue::Set(serde_json::Value::from(equipment));
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.update(self.db).await?;

        RescueTeam::from_entity(entity).map(Some)
    }

    /// Moves a live team from `from` to `to` if it is still in `from`.
    ///
    /// # Returns
    /// - `Ok(true)` - The status was flipped
    /// - `Ok(false)` - The team is missing, deleted, or no longer in `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition_status(
        &self,
        id: Uuid,
        from: TeamStatus,
        to: TeamStatus,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RescueTeam::update_many()
            .set(entity::rescue_team::ActiveModel {
                status: ActiveValue::Set(to),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::rescue_team::Column::Id.eq(id))
            .filter(entity::rescue_team::Column::Status.eq(from))
            .filter(entity::rescue_team::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the status of a live team regardless of its current status.
    ///
    /// # Returns
    /// - `Ok(true)` - The team exists and was updated
    /// - `Ok(false)` - No live team with that id
    pub async fn set_status(
        &self,
        id: Uuid,
        status: TeamStatus,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RescueTeam::update_many()
            .set(entity::rescue_team::ActiveModel {
                status: ActiveValue::Set(status),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::rescue_team::Column::Id.eq(id))
            .filter(entity::rescue_team::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Soft-deletes a live team unless it is on a mission.
    ///
    /// # Returns
    /// - `Ok(true)` - The team was soft-deleted
    /// - `Ok(false)` - Missing, already deleted, or currently `on_mission`
    pub async fn soft_delete_unless_on_mission(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RescueTeam::update_many()
            .set(entity::rescue_team::ActiveModel {
                deleted_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::rescue_team::Column::Id.eq(id))
            .filter(entity::rescue_team::Column::Status.ne(TeamStatus::OnMission))
            .filter(entity::rescue_team::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
