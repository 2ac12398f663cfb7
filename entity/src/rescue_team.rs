use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Availability of a rescue team.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "on_mission")]
    OnMission,
    #[sea_orm(string_value = "unavailable")]
    Unavailable,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum TeamSpecialization {
    #[sea_orm(string_value = "general")]
    General,
    #[sea_orm(string_value = "medical")]
    Medical,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
    #[sea_orm(string_value = "supplies")]
    Supplies,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rescue_team")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub leader_name: String,
    pub phone_number: String,
    pub specialization: TeamSpecialization,
    pub capacity: i32,
    pub current_members: i32,
    pub status: TeamStatus,
    pub province_city: String,
    /// JSON array of equipment names.
    pub equipment: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rescue_request::Entity")]
    RescueRequest,
}

impl Related<super::rescue_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RescueRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
