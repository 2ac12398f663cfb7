//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Lifecycle rules, validation and role checks
//! - **Orchestration**: Coordinating repository calls across requests and teams
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running paired writes through `UnitOfWork`

pub mod authorization;
pub mod rescue_request;
pub mod rescue_team;
pub mod user;

#[cfg(test)]
mod test;
