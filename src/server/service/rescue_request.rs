//! Rescue request lifecycle engine.
//!
//! Triage operations load the request, check its current status, then check the
//! actor's role, then write. Operations that move a request and its team together
//! (`assign_team`, `complete_mission`, deleting a request on a mission) run inside
//! one `UnitOfWork`, so either both rows change or neither does.

use chrono::Utc;
use entity::{rescue_request::RequestStatus, rescue_team::TeamStatus};
use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{rescue_request::RescueRequestRepository, unit_of_work::UnitOfWork},
    error::{conflict::ConflictError, AppError},
    model::{
        lifecycle::{
            append_note, can_transition, ensure_status, involves_team, status_name,
            RequestTransition,
        },
        pagination::{Page, PageRequest},
        rescue_request::{
            CreateRescueRequestParams, RequestStatistics, RescueRequest, RescueRequestFilter,
            UpdateRescueRequestParams,
        },
    },
    service::{
        authorization::{Authorizer, ADMIN_ROLES, TRIAGE_ROLES},
        rescue_team::RescueTeamService,
    },
    util::parse::non_blank,
};

pub struct RescueRequestService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C> RescueRequestService<'a, C>
where
    C: ConnectionTrait + TransactionTrait<Transaction = DatabaseTransaction>,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Validates and stores a new request with status `new`.
    ///
    /// Anonymous submissions are allowed; `params.created_by` is then `None`.
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The created request
    /// - `Err(AppError::Validation)` - Missing field, bad location or out-of-range value
    pub async fn create(&self, params: CreateRescueRequestParams) -> Result<RescueRequest, AppError> {
        let request = params.validate()?;

        let created = UnitOfWork::new(self.db)
            .run(move |txn| {
                Box::pin(async move {
                    RescueRequestRepository::new(txn)
                        .create(request, Utc::now())
                        .await
                        .map_err(AppError::from)
                })
            })
            .await?;

        tracing::info!(
            request_id = %created.id,
            category = %created.category.to_value(),
            anonymous = created.created_by.is_none(),
            "Created rescue request"
        );

        Ok(created)
    }

    /// Approves a new request, moving it to `pending_verification`.
    ///
    /// Without notes, a default audit line naming the actor is recorded.
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The approved request
    /// - `Err(AppError::NotFound)` - Request missing, or unknown actor
    /// - `Err(AppError::InvalidState)` - Request is not `new`
    /// - `Err(AppError::Forbidden)` - Actor is not a coordinator or admin
    /// - `Err(AppError::Conflict(RequestStateChanged))` - Request changed concurrently
    pub async fn approve(
        &self,
        id: Uuid,
        actor_id: Uuid,
        notes: Option<String>,
    ) -> Result<RescueRequest, AppError> {
        let request = self.get_by_id(id).await?;
        self.check_status("approve", &request, RequestStatus::New)?;

        let actor = Authorizer::new(self.db)
            .require_role(actor_id, TRIAGE_ROLES)
            .await?;

        let notes = non_blank(notes).unwrap_or_else(|| {
            format!("Approved by {} {}", actor.role.to_value(), actor.name)
        });

        let approved = self
            .apply(
                id,
                RequestTransition::Approve {
                    verified_by: actor.id,
                    notes,
                },
            )
            .await?;

        tracing::info!(request_id = %id, actor_id = %actor.id, "Approved rescue request");

        Ok(approved)
    }

    /// Rejects a new request with a mandatory reason.
    ///
    /// The stored notes become `Rejected: <reason>`.
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The rejected request
    /// - `Err(AppError::Validation)` - Reason missing or blank
    /// - `Err(AppError::NotFound)` - Request missing, or unknown actor
    /// - `Err(AppError::InvalidState)` - Request is not `new`
    /// - `Err(AppError::Forbidden)` - Actor is not a coordinator or admin
    pub async fn reject(
        &self,
        id: Uuid,
        actor_id: Uuid,
        reason: Option<String>,
    ) -> Result<RescueRequest, AppError> {
        let reason = non_blank(reason)
            .ok_or_else(|| AppError::Validation("A rejection reason is required".to_string()))?;

        let request = self.get_by_id(id).await?;
        self.check_status("reject", &request, RequestStatus::New)?;

        let actor = Authorizer::new(self.db)
            .require_role(actor_id, TRIAGE_ROLES)
            .await?;

        let rejected = self
            .apply(
                id,
                RequestTransition::Reject {
                    verified_by: actor.id,
                    notes: format!("Rejected: {}", reason),
                },
            )
            .await?;

        tracing::info!(request_id = %id, actor_id = %actor.id, "Rejected rescue request");

        Ok(rejected)
    }

    /// Dispatches an available team to a verified request.
    ///
    /// The team claim and the request transition are written in one transaction.
    /// The team is claimed with a compare-and-set on `available`, so when two
    /// dispatchers race for the same team exactly one wins.
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The request, now `on_mission`
    /// - `Err(AppError::NotFound)` - Unknown actor, request or team
    /// - `Err(AppError::Forbidden)` - Actor is not a coordinator or admin
    /// - `Err(AppError::InvalidState)` - Request is not `pending_verification`
    /// - `Err(AppError::Conflict(TeamNotAvailable))` - Team is not `available`
    /// - `Err(AppError::Conflict(RequestStateChanged))` - Request changed concurrently
    pub async fn assign_team(
        &self,
        id: Uuid,
        team_id: Uuid,
        actor_id: Uuid,
    ) -> Result<RescueRequest, AppError> {
        let request = self.get_by_id(id).await?;
        self.check_status("assign a team to", &request, RequestStatus::PendingVerification)?;

        let actor = Authorizer::new(self.db)
            .require_role(actor_id, TRIAGE_ROLES)
            .await?;

        let team = RescueTeamService::new(self.db).get_by_id(team_id).await?;
        if team.status != TeamStatus::Available {
            tracing::debug!(
                request_id = %id,
                team_id = %team_id,
                team_status = %team.status.to_value(),
                "Refused to assign unavailable team"
            );
            return Err(ConflictError::TeamNotAvailable(team_id).into());
        }

        let transition = RequestTransition::Assign {
            team_id,
            assigned_by: actor.id,
        };

        let assigned = UnitOfWork::new(self.db)
            .run(move |txn| {
                Box::pin(async move {
                    RescueTeamService::new(txn).set_on_mission(team_id).await?;

                    let assigned = RescueRequestRepository::new(txn)
                        .apply_transition(id, &transition, Utc::now())
                        .await?
                        .ok_or(ConflictError::RequestStateChanged(id))?;

                    Ok::<_, AppError>(assigned)
                })
            })
            .await
            .inspect_err(|err| {
                tracing::debug!(request_id = %id, team_id = %team_id, "Team assignment rolled back: {}", err)
            })?;

        tracing::info!(
            request_id = %id,
            team_id = %team_id,
            actor_id = %actor.id,
            "Assigned rescue team"
        );

        Ok(assigned)
    }

    /// Completes a mission and releases its team.
    ///
    /// The completion line is appended to the existing notes. The request
    /// transition and the team release are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The request, now `completed`
    /// - `Err(AppError::NotFound)` - Unknown actor, request, or assigned team
    /// - `Err(AppError::Forbidden)` - Actor is not a coordinator or admin
    /// - `Err(AppError::InvalidState)` - Request is not `on_mission` or has no team
    /// - `Err(AppError::Conflict(RequestStateChanged))` - Request changed concurrently
    pub async fn complete_mission(
        &self,
        id: Uuid,
        actor_id: Uuid,
        completion_notes: Option<String>,
    ) -> Result<RescueRequest, AppError> {
        let request = self.get_by_id(id).await?;
        self.check_status("complete", &request, RequestStatus::OnMission)?;

        let actor = Authorizer::new(self.db)
            .require_role(actor_id, TRIAGE_ROLES)
            .await?;

        let team_id = request.assigned_team_id.ok_or_else(|| {
            AppError::InvalidState(format!("Rescue request {} has no assigned team", id))
        })?;

        let line = match non_blank(completion_notes) {
            Some(notes) => format!("Completed: {}", notes),
            None => "Mission completed".to_string(),
        };

        let completed = UnitOfWork::new(self.db)
            .run(move |txn| {
                Box::pin(async move {
                    let repo = RescueRequestRepository::new(txn);

                    // Notes are appended to what is stored now, not to the earlier read.
                    let current = repo
                        .find_by_id(id)
                        .await?
                        .filter(|r| r.status == RequestStatus::OnMission)
                        .ok_or(ConflictError::RequestStateChanged(id))?;
                    let transition = RequestTransition::Complete {
                        notes: append_note(current.notes.as_deref(), &line),
                    };

                    let completed = repo
                        .apply_transition(id, &transition, Utc::now())
                        .await?
                        .ok_or(ConflictError::RequestStateChanged(id))?;

                    RescueTeamService::new(txn).set_available(team_id).await?;

                    Ok::<_, AppError>(completed)
                })
            })
            .await?;

        tracing::info!(
            request_id = %id,
            team_id = %team_id,
            actor_id = %actor.id,
            "Completed rescue mission"
        );

        Ok(completed)
    }

    /// Gets a live request by id.
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - Request found
    /// - `Err(AppError::NotFound)` - Missing or soft-deleted
    pub async fn get_by_id(&self, id: Uuid) -> Result<RescueRequest, AppError> {
        RescueRequestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rescue request {} not found", id)))
    }

    /// Gets one page of requests, most recently created first.
    pub async fn get_paginated(
        &self,
        filter: RescueRequestFilter,
        page: PageRequest,
    ) -> Result<Page<RescueRequest>, AppError> {
        let (requests, total) = RescueRequestRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Page::new(requests, page, total))
    }

    /// Applies an administrative correction.
    ///
    /// A status change must be an edge of the lifecycle that does not involve a
    /// team; moving to `on_mission` or `completed` is only possible through
    /// `assign_team` and `complete_mission`.
    ///
    /// # Returns
    /// - `Ok(RescueRequest)` - The updated request
    /// - `Err(AppError::NotFound)` - Unknown actor, or request missing
    /// - `Err(AppError::Forbidden)` - Actor is not a coordinator or admin
    /// - `Err(AppError::InvalidState)` - Status change not allowed
    /// - `Err(AppError::Conflict(RequestStateChanged))` - Status changed concurrently
    pub async fn update(
        &self,
        id: Uuid,
        actor_id: Uuid,
        params: UpdateRescueRequestParams,
    ) -> Result<RescueRequest, AppError> {
        let actor = Authorizer::new(self.db)
            .require_role(actor_id, TRIAGE_ROLES)
            .await?;

        let request = self.get_by_id(id).await?;

        if let Some(target) = params.status {
            let changes = target != request.status;
            if changes
                && (!can_transition(&request.status, &target)
                    || involves_team(&request.status, &target))
            {
                tracing::debug!(
                    request_id = %id,
                    from = status_name(&request.status),
                    to = status_name(&target),
                    "Refused status change through update"
                );
                return Err(AppError::InvalidState(format!(
                    "Cannot change status from '{}' to '{}' with an update",
                    status_name(&request.status),
                    status_name(&target)
                )));
            }
        }

        // A patch carrying a status was checked against the status read above.
        let expected_status = params.status.map(|_| request.status);

        let repo = RescueRequestRepository::new(self.db);
        let Some(updated) = repo.update(id, params, expected_status, Utc::now()).await? else {
            return match repo.find_by_id(id).await? {
                None => Err(AppError::NotFound(format!("Rescue request {} not found", id))),
                Some(_) => Err(ConflictError::RequestStateChanged(id).into()),
            };
        };

        tracing::info!(
            request_id = %id,
            actor_id = %actor.id,
            status = status_name(&updated.status),
            "Updated rescue request"
        );

        Ok(updated)
    }

    /// Soft-deletes a request.
    ///
    /// Deleting a request that is on a mission also releases its team, in the
    /// same transaction, so the team is never left `on_mission` without a request.
    /// The request is re-read inside the transaction and only deleted while it is
    /// still in that status, so a team that has since moved on is left alone.
    ///
    /// # Returns
    /// - `Ok(())` - The request was soft-deleted
    /// - `Err(AppError::NotFound)` - Unknown actor, or request missing
    /// - `Err(AppError::Forbidden)` - Actor is not an admin
    /// - `Err(AppError::Conflict(RequestStateChanged))` - Status changed concurrently
    pub async fn delete(&self, id: Uuid, actor_id: Uuid) -> Result<(), AppError> {
        let actor = Authorizer::new(self.db)
            .require_role(actor_id, ADMIN_ROLES)
            .await?;

        let released_team = UnitOfWork::new(self.db)
            .run(move |txn| {
                Box::pin(async move {
                    let repo = RescueRequestRepository::new(txn);

                    let request = repo.find_by_id(id).await?.ok_or_else(|| {
                        AppError::NotFound(format!("Rescue request {} not found", id))
                    })?;

                    if !repo.soft_delete(id, request.status, Utc::now()).await? {
                        return Err(AppError::from(ConflictError::RequestStateChanged(id)));
                    }

                    let Some(team_id) = request
                        .assigned_team_id
                        .filter(|_| request.status == RequestStatus::OnMission)
                    else {
                        return Ok(None);
                    };

                    if !RescueTeamService::new(txn).release_from_mission(team_id).await? {
                        tracing::warn!(
                            request_id = %id,
                            team_id = %team_id,
                            "Assigned team of deleted mission was not on a mission"
                        );
                        return Ok(None);
                    }

                    Ok::<_, AppError>(Some(team_id))
                })
            })
            .await?;

        tracing::info!(
            request_id = %id,
            actor_id = %actor.id,
            released_team_id = ?released_team,
            "Deleted rescue request"
        );

        Ok(())
    }

    /// Counts live requests in total, per status and per category.
    pub async fn statistics(&self) -> Result<RequestStatistics, AppError> {
        Ok(RescueRequestRepository::new(self.db).statistics().await?)
    }

    fn check_status(
        &self,
        action: &str,
        request: &RescueRequest,
        expected: RequestStatus,
    ) -> Result<(), AppError> {
        ensure_status(action, &request.status, expected).inspect_err(|_| {
            tracing::debug!(
                request_id = %request.id,
                status = status_name(&request.status),
                "Refused to {} rescue request",
                action
            )
        })
    }

    /// Applies a single-row transition outside of a transaction.
    async fn apply(&self, id: Uuid, transition: RequestTransition) -> Result<RescueRequest, AppError> {
        RescueRequestRepository::new(self.db)
            .apply_transition(id, &transition, Utc::now())
            .await?
            .ok_or_else(|| ConflictError::RequestStateChanged(id).into())
    }
}
