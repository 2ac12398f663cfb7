//! Rescue request data repository.
//!
//! Lifecycle status changes are applied with `apply_transition`, which only
//! updates the row while it is still in the transition's source status. The
//! administrative `update` and `soft_delete` are guarded the same way. A write
//! that matches no row leaves storage untouched.

use chrono::{DateTime, Utc};
use entity::rescue_request::{RequestCategory, RequestStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Iterable,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::{
    lifecycle::RequestTransition,
    pagination::PageRequest,
    rescue_request::{
        NewRescueRequest, RequestStatistics, RescueRequest, RescueRequestFilter,
        UpdateRescueRequestParams,
    },
};

pub struct RescueRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RescueRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Base query over requests that have not been soft-deleted.
    fn live() -> Select<entity::rescue_request::Entity> {
        entity::prelude::RescueRequest::find()
            .filter(entity::rescue_request::Column::DeletedAt.is_null())
    }

    /// Inserts a validated request with status `new`.
    ///
    /// # Arguments
    /// - `request` - Validated request holding exactly one location form
    /// - `now` - Creation timestamp, also used for `updated_at`
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The created request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        request: NewRescueRequest,
        now: DateTime<Utc>,
    ) -> Result<RescueRequest, DbErr> {
        let entity = entity::rescue_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            category: ActiveValue::Set(request.category),
            province_city: ActiveValue::Set(request.province_city),
            phone_number: ActiveValue::Set(request.phone_number),
            description: ActiveValue::Set(request.description),
            num_people: ActiveValue::Set(request.num_people),
            priority: ActiveValue::Set(request.priority),
            status: ActiveValue::Set(RequestStatus::New),
            location_type: ActiveValue::Set(request.location_type),
            latitude: ActiveValue::Set(request.latitude),
            longitude: ActiveValue::Set(request.longitude),
            address: ActiveValue::Set(request.address),
            media_urls: ActiveValue::Set(serde_json::Value::from(request.media_urls)),
            created_by: ActiveValue::Set(request.created_by),
            verified_by: ActiveValue::Set(None),
            verified_at: ActiveValue::Set(None),
            assigned_by: ActiveValue::Set(None),
            assigned_team_id: ActiveValue::Set(None),
            assigned_at: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        RescueRequest::from_entity(entity)
    }

    /// Finds a live request by id.
    ///
    /// # Returns
    /// - `Ok(Some(RescueRequest))` - Request found
    /// - `Ok(None)` - No request with that id, or it was soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RescueRequest>, DbErr> {
        Self::live()
            .filter(entity::rescue_request::Column::Id.eq(id))
            .one(self.db)
            .await?
            .map(RescueRequest::from_entity)
            .transpose()
    }

    /// Gets one page of live requests, most recently created first.
    ///
    /// # Returns
    /// - `Ok((Vec<RescueRequest>, u64))` - The page and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &RescueRequestFilter,
        page: PageRequest,
    ) -> Result<(Vec<RescueRequest>, u64), DbErr> {
        let mut query = Self::live();
        if let Some(status) = filter.status {
            query = query.filter(entity::rescue_request::Column::Status.eq(status));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::rescue_request::Column::Category.eq(category));
        }
        if let Some(province_city) = &filter.province_city {
            query = query
                .filter(entity::rescue_request::Column::ProvinceCity.eq(province_city.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(entity::rescue_request::Column::Priority.eq(priority));
        }

        let paginator = query
            .order_by_desc(entity::rescue_request::Column::CreatedAt)
            .order_by_desc(entity::rescue_request::Column::Id)
            .paginate(self.db, page.limit());

        let total = paginator.num_items().await?;
        let requests = paginator
            .fetch_page(page.page_index())
            .await?
            .into_iter()
            .map(RescueRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((requests, total))
    }

    /// Applies an administrative patch to a live request.
    ///
    /// With `expected_status`, the patch only applies while the request is still in
    /// that status, so a status checked against an earlier read cannot overwrite a
    /// transition that happened since. The caller checks that the change is allowed.
    ///
    /// # Returns
    /// - `Ok(Some(RescueRequest))` - The updated request
    /// - `Ok(None)` - Missing, deleted, or no longer in `expected_status`
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateRescueRequestParams,
        expected_status: Option<RequestStatus>,
        now: DateTime<Utc>,
    ) -> Result<Option<RescueRequest>, DbErr> {
        let active_model = entity::rescue_request::ActiveModel {
            status: params.status.map_or(ActiveValue::NotSet, ActiveValue::Set),
            priority: params
                .priority
                .map_or(ActiveValue::NotSet, |p| ActiveValue::Set(Some(p))),
            notes: params
                .notes
                .map_or(ActiveValue::NotSet, |n| ActiveValue::Set(Some(n))),
            verified_by: params
                .verified_by
                .map_or(ActiveValue::NotSet, |v| ActiveValue::Set(Some(v))),
            verified_at: params
                .verified_at
                .map_or(ActiveValue::NotSet, |v| ActiveValue::Set(Some(v))),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let mut query = entity::prelude::RescueRequest::update_many()
            .set(active_model)
            .filter(entity::rescue_request::Column::Id.eq(id))
            .filter(entity::rescue_request::Column::DeletedAt.is_null());
        if let Some(status) = expected_status {
            query = query.filter(entity::rescue_request::Column::Status.eq(status));
        }

        let result = query.exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Applies a lifecycle transition if the request is still in its source status.
    ///
    /// # Arguments
    /// - `id` - Request to move
    /// - `transition` - The status change and the fields it stamps
    /// - `now` - Timestamp for `updated_at` and the verified/assigned stamps
    ///
    /// # Returns
    /// - `Ok(Some(RescueRequest))` - The transition applied; the reloaded request
    /// - `Ok(None)` - The request is missing, deleted, or no longer in the source status
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_transition(
        &self,
        id: Uuid,
        transition: &RequestTransition,
        now: DateTime<Utc>,
    ) -> Result<Option<RescueRequest>, DbErr> {
        let result = entity::prelude::RescueRequest::update_many()
            .set(transition.into_active_model(now))
            .filter(entity::rescue_request::Column::Id.eq(id))
            .filter(entity::rescue_request::Column::Status.eq(transition.from_status()))
            .filter(entity::rescue_request::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Soft-deletes a live request while it is still in `expected_status`.
    ///
    /// # Returns
    /// - `Ok(true)` - The request was soft-deleted
    /// - `Ok(false)` - Missing, already deleted, or no longer in `expected_status`
    pub async fn soft_delete(
        &self,
        id: Uuid,
        expected_status: RequestStatus,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RescueRequest::update_many()
            .set(entity::rescue_request::ActiveModel {
                deleted_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::rescue_request::Column::Id.eq(id))
            .filter(entity::rescue_request::Column::Status.eq(expected_status))
            .filter(entity::rescue_request::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Counts live requests in total, per status and per category.
    ///
    /// Every status and category gets an entry, zero when nothing matches.
    pub async fn statistics(&self) -> Result<RequestStatistics, DbErr> {
        let total = Self::live().count(self.db).await?;

        let mut by_status = Vec::new();
        for status in RequestStatus::iter() {
            let count = Self::live()
                .filter(entity::rescue_request::Column::Status.eq(status))
                .count(self.db)
                .await?;
            by_status.push((status, count));
        }

        let mut by_category = Vec::new();
        for category in RequestCategory::iter() {
            let count = Self::live()
                .filter(entity::rescue_request::Column::Category.eq(category))
                .count(self.db)
                .await?;
            by_category.push((category, count));
        }

        Ok(RequestStatistics {
            total,
            by_status,
            by_category,
        })
    }
}
