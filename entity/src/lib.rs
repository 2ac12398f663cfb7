//! SeaORM entities for the rescue coordination schema.

pub mod prelude;

pub mod rescue_request;
pub mod rescue_team;
pub mod user;
