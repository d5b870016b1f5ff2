use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign key for main_character_id is created alongside the eve_character table
        manager
            .create_table(
                Table::create()
                    .table(RecruitUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RecruitUser::Id))
                    .col(string_null(RecruitUser::Email).unique_key())
                    .col(boolean(RecruitUser::Active).default(true))
                    .col(timestamp(RecruitUser::CreatedAt))
                    .col(timestamp_null(RecruitUser::ConfirmedAt))
                    .col(timestamp_null(RecruitUser::LastLoginAt))
                    .col(timestamp_null(RecruitUser::CurrentLoginAt))
                    .col(string_null(RecruitUser::LastLoginIp))
                    .col(string_null(RecruitUser::CurrentLoginIp))
                    .col(integer(RecruitUser::LoginCount).default(0))
                    .col(integer_null(RecruitUser::MainCharacterId))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecruitUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RecruitUser {
    Table,
    Id,
    Email,
    Active,
    CreatedAt,
    ConfirmedAt,
    LastLoginAt,
    CurrentLoginAt,
    LastLoginIp,
    CurrentLoginIp,
    LoginCount,
    MainCharacterId,
}
