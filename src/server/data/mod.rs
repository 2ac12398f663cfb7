//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.
//!
//! Every repository is generic over `ConnectionTrait`, so the same code runs against the
//! pooled connection or inside a transaction opened by `UnitOfWork`. Reads never return
//! soft-deleted rows.

pub mod rescue_request;
pub mod rescue_team;
pub mod unit_of_work;
pub mod user;

#[cfg(test)]
mod test;
