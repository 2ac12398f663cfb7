use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_rescue_team_table::RescueTeam;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RescueRequest::Table)
                    .if_not_exists()
                    .col(pk_uuid(RescueRequest::Id))
                    .col(string_len(RescueRequest::Category, 32))
                    .col(string(RescueRequest::ProvinceCity))
                    .col(string(RescueRequest::PhoneNumber))
                    .col(text(RescueRequest::Description))
                    .col(integer(RescueRequest::NumPeople).default(1))
                    .col(string_len_null(RescueRequest::Priority, 16))
                    .col(string_len(RescueRequest::Status, 32).default("new"))
                    .col(string_len(RescueRequest::LocationType, 16))
                    .col(double_null(RescueRequest::Latitude))
                    .col(double_null(RescueRequest::Longitude))
                    .col(text_null(RescueRequest::Address))
                    .col(json(RescueRequest::MediaUrls))
                    .col(uuid_null(RescueRequest::CreatedBy))
                    .col(uuid_null(RescueRequest::VerifiedBy))
                    .col(timestamp_with_time_zone_null(RescueRequest::VerifiedAt))
                    .col(uuid_null(RescueRequest::AssignedBy))
                    .col(uuid_null(RescueRequest::AssignedTeamId))
                    .col(timestamp_with_time_zone_null(RescueRequest::AssignedAt))
                    .col(text_null(RescueRequest::Notes))
                    .col(
                        timestamp_with_time_zone(RescueRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(RescueRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(RescueRequest::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rescue_request_assigned_team_id")
                            .from(RescueRequest::Table, RescueRequest::AssignedTeamId)
                            .to(RescueTeam::Table, RescueTeam::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rescue_request_status_created_at")
                    .table(RescueRequest::Table)
                    .col(RescueRequest::Status)
                    .col(RescueRequest::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rescue_request_assigned_team_id")
                    .table(RescueRequest::Table)
                    .col(RescueRequest::AssignedTeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RescueRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RescueRequest {
    Table,
    Id,
    Category,
    ProvinceCity,
    PhoneNumber,
    Description,
    NumPeople,
    Priority,
    Status,
    LocationType,
    Latitude,
    Longitude,
    Address,
    MediaUrls,
    CreatedBy,
    VerifiedBy,
    VerifiedAt,
    AssignedBy,
    AssignedTeamId,
    AssignedAt,
    Notes,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
