//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod lifecycle;
pub mod pagination;
pub mod rescue_request;
pub mod rescue_team;
pub mod user;
