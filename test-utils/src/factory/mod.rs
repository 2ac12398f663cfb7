//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert straight into the database and bypass
//! the service layer, so they can put entities into any lifecycle state a test needs.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let coordinator = factory::user::create_coordinator(&db).await?;
//!     let team = factory::rescue_team::create_team(&db).await?;
//!
//!     // Create a request that is already approved
//!     let request = factory::rescue_request::RescueRequestFactory::new(&db)
//!         .status(RequestStatus::PendingVerification)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create users with a role and access token
//! - `rescue_team` - Create rescue team entities
//! - `rescue_request` - Create rescue request entities
//! - `helpers` - Shared ID counter and multi-entity setups

pub mod helpers;
pub mod rescue_request;
pub mod rescue_team;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use rescue_request::create_request;
pub use rescue_team::create_team;
pub use user::{create_admin, create_citizen, create_coordinator};
