//! API data transfer objects.
//!
//! These types define the JSON contract of the HTTP API. Enum values and field
//! names are part of that contract and are serialized verbatim.

pub mod api;
pub mod rescue_request;
pub mod rescue_team;
pub mod user;
