//! Rescue request lifecycle rules.
//!
//! The request status machine is:
//!
//! ```text
//! new ──approve──▶ pending_verification ──assign──▶ on_mission ──complete──▶ completed
//!  └──reject──▶ rejected
//! ```
//!
//! Every transition is one-way. `rejected` and `completed` are terminal. The
//! repository applies a `RequestTransition` with a compare-and-set on the
//! expected source status, so the table below is the only authority on which
//! status changes can reach storage.

use chrono::{DateTime, Utc};
use entity::rescue_request::RequestStatus;
use uuid::Uuid;

use crate::server::error::AppError;

/// Returns true when `from → to` is an edge of the request status machine.
pub fn can_transition(from: &RequestStatus, to: &RequestStatus) -> bool {
    matches!(
        (from, to),
        (RequestStatus::New, RequestStatus::PendingVerification)
            | (RequestStatus::New, RequestStatus::Rejected)
            | (RequestStatus::PendingVerification, RequestStatus::OnMission)
            | (RequestStatus::OnMission, RequestStatus::Completed)
    )
}

/// Returns true when no transition leaves `status`.
pub fn is_terminal(status: &RequestStatus) -> bool {
    matches!(status, RequestStatus::Rejected | RequestStatus::Completed)
}

/// Returns true when the edge `from → to` changes the assigned team's status.
///
/// Such edges may only be taken through the paired assign/complete operations.
pub fn involves_team(from: &RequestStatus, to: &RequestStatus) -> bool {
    matches!(
        (from, to),
        (RequestStatus::PendingVerification, RequestStatus::OnMission)
            | (RequestStatus::OnMission, RequestStatus::Completed)
    )
}

/// Fails with `InvalidState` unless the request is currently in `expected`.
///
/// # Arguments
/// - `action` - Human readable name of the attempted operation, used in the message
/// - `current` - Status the request is in now
/// - `expected` - Status the operation requires
pub fn ensure_status(
    action: &str,
    current: &RequestStatus,
    expected: RequestStatus,
) -> Result<(), AppError> {
    if *current == expected {
        return Ok(());
    }

    if is_terminal(current) {
        return Err(AppError::InvalidState(format!(
            "Cannot {} a rescue request that is already '{}'",
            action,
            status_name(current)
        )));
    }

    Err(AppError::InvalidState(format!(
        "Cannot {} a rescue request with status '{}', expected '{}'",
        action,
        status_name(current),
        status_name(&expected)
    )))
}

/// Appends an audit line to existing notes, never discarding what is there.
pub fn append_note(existing: Option<&str>, line: &str) -> String {
    match existing.map(str::trim_end).filter(|n| !n.is_empty()) {
        Some(existing) => format!("{}\n{}", existing, line),
        None => line.to_string(),
    }
}

/// Wire name of a request status, e.g. `pending_verification`.
pub fn status_name(status: &RequestStatus) -> &'static str {
    match status {
        RequestStatus::New => "new",
        RequestStatus::PendingVerification => "pending_verification",
        RequestStatus::Rejected => "rejected",
        RequestStatus::OnMission => "on_mission",
        RequestStatus::Completed => "completed",
    }
}

/// A single guarded status change of a rescue request, with the fields it stamps.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestTransition {
    /// `new → pending_verification`
    Approve { verified_by: Uuid, notes: String },
    /// `new → rejected`
    Reject { verified_by: Uuid, notes: String },
    /// `pending_verification → on_mission`
    Assign { team_id: Uuid, assigned_by: Uuid },
    /// `on_mission → completed`, `notes` is the full appended audit trail
    Complete { notes: String },
}

impl RequestTransition {
    /// Status the request must be in for the transition to apply.
    pub fn from_status(&self) -> RequestStatus {
        match self {
            Self::Approve { .. } | Self::Reject { .. } => RequestStatus::New,
            Self::Assign { .. } => RequestStatus::PendingVerification,
            Self::Complete { .. } => RequestStatus::OnMission,
        }
    }

    /// Status the request ends up in.
    pub fn to_status(&self) -> RequestStatus {
        match self {
            Self::Approve { .. } => RequestStatus::PendingVerification,
            Self::Reject { .. } => RequestStatus::Rejected,
            Self::Assign { .. } => RequestStatus::OnMission,
            Self::Complete { .. } => RequestStatus::Completed,
        }
    }

    /// Builds the active model holding exactly the columns this transition writes.
    ///
    /// # Arguments
    /// - `now` - Timestamp used for `updated_at` and the verified/assigned stamps
    pub fn into_active_model(&self, now: DateTime<Utc>) -> entity::rescue_request::ActiveModel {
        use sea_orm::ActiveValue::Set;

        let mut model = entity::rescue_request::ActiveModel {
            status: Set(self.to_status()),
            updated_at: Set(now),
            ..Default::default()
        };

        match self {
            Self::Approve { verified_by, notes } | Self::Reject { verified_by, notes } => {
                model.verified_by = Set(Some(*verified_by));
                model.verified_at = Set(Some(now));
                model.notes = Set(Some(notes.clone()));
            }
            Self::Assign {
                team_id,
                assigned_by,
            } => {
                model.assigned_team_id = Set(Some(*team_id));
                model.assigned_by = Set(Some(*assigned_by));
                model.assigned_at = Set(Some(now));
            }
            Self::Complete { notes } => {
                model.notes = Set(Some(notes.clone()));
            }
        }

        model
    }
}
