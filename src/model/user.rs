use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub name: String,
    #[schema(value_type = String, example = "coordinator")]
    pub role: UserRole,
}

/// Caller identity as resolved from a bearer credential.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[schema(value_type = String, example = "coordinator")]
    pub role: UserRole,
}

/// Newly provisioned user together with its access token.
///
/// This is the only response that ever contains the token.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedUserDto {
    pub user: UserDto,
    pub access_token: String,
}
