//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversions and business rules that operate on entity models.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let request = fixture::rescue_request::entity();
//! let team = fixture::rescue_team::entity();
//! ```

pub mod rescue_request;
pub mod rescue_team;

pub use rescue_request::entity as rescue_request_entity;
pub use rescue_team::entity as rescue_team_entity;
