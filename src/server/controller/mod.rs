//! HTTP request handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, convert DTOs into
//! operation params, call the matching service and convert the returned domain
//! model back into a DTO. Every handler carries a `utoipa::path` annotation so
//! the router can derive the OpenAPI document from the same definitions it mounts.

pub mod rescue_request;
pub mod rescue_team;
pub mod user;
