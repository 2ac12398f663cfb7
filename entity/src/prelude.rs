pub use super::rescue_request::Entity as RescueRequest;
pub use super::rescue_team::Entity as RescueTeam;
pub use super::user::Entity as User;
