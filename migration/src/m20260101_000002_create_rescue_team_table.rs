use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RescueTeam::Table)
                    .if_not_exists()
                    .col(pk_uuid(RescueTeam::Id))
                    .col(string(RescueTeam::Name))
                    .col(string(RescueTeam::LeaderName))
                    .col(string(RescueTeam::PhoneNumber))
                    .col(string_len(RescueTeam::Specialization, 16).default("general"))
                    .col(integer(RescueTeam::Capacity).default(5))
                    .col(integer(RescueTeam::CurrentMembers).default(0))
                    .col(string_len(RescueTeam::Status, 16).default("available"))
                    .col(string(RescueTeam::ProvinceCity))
                    .col(json(RescueTeam::Equipment))
                    .col(text_null(RescueTeam::Notes))
                    .col(
                        timestamp_with_time_zone(RescueTeam::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(RescueTeam::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(RescueTeam::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rescue_team_status_created_at")
                    .table(RescueTeam::Table)
                    .col(RescueTeam::Status)
                    .col(RescueTeam::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Names only need to be unique among live teams.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_rescue_team_name_live \
                 ON rescue_team (name) WHERE deleted_at IS NULL",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RescueTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RescueTeam {
    Table,
    Id,
    Name,
    LeaderName,
    PhoneNumber,
    Specialization,
    Capacity,
    CurrentMembers,
    Status,
    ProvinceCity,
    Equipment,
    Notes,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
