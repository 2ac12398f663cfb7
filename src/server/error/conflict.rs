use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// Conflicts between a write and the current stored state.
///
/// Covers both uniqueness violations and the stale-state races that the
/// compare-and-set updates detect when two callers act on the same entity.
#[derive(Error, Debug)]
pub enum ConflictError {
    /// Another live team already uses this name.
    #[error("A rescue team named '{0}' already exists")]
    DuplicateTeamName(String),

    /// Another user already uses this email.
    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    /// The team is not `available`, so it cannot take a mission.
    #[error("Rescue team {0} is not available")]
    TeamNotAvailable(Uuid),

    /// The team is on a mission and cannot be deleted.
    #[error("Rescue team {0} is on a mission")]
    TeamOnMission(Uuid),

    /// The request changed status between being read and being written.
    #[error("Rescue request {0} was modified concurrently, reload and retry")]
    RequestStateChanged(Uuid),
}

/// Converts conflict errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For `DuplicateTeamName` and `DuplicateEmail`
/// - 400 Bad Request - For stale-state conflicts
impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateTeamName(_) | Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::TeamNotAvailable(_) | Self::TeamOnMission(_) | Self::RequestStateChanged(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        tracing::debug!("Conflict: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
