use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a request that needs one.
    #[error("Missing bearer credential")]
    MissingCredential,

    /// The bearer credential does not belong to any user.
    ///
    /// The token itself is never included in the message.
    #[error("Bearer credential does not match any user")]
    UnknownCredential,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with a generic message so the
/// response does not reveal whether a credential was malformed or unknown.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failed: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication required".to_string(),
            }),
        )
            .into_response()
    }
}
