use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_recruit_user::RecruitUser;

static IDX_HR_APPLICATION_USER_ID: &str = "idx-hr_application-user_id";
static IDX_HR_APPLICATION_STATUS: &str = "idx-hr_application-status";
static FK_HR_APPLICATION_USER_ID: &str = "fk-hr_application-user_id";
static FK_HR_APPLICATION_REVIEWER_USER_ID: &str = "fk-hr_application-reviewer_user_id";
static FK_HR_APPLICATION_LAST_USER_ID: &str = "fk-hr_application-last_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HrApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(HrApplication::Id))
                    .col(integer(HrApplication::UserId))
                    .col(string(HrApplication::MainCharacterName))
                    .col(string_len(HrApplication::Status, 16))
                    .col(string(HrApplication::HowLongPlaying))
                    .col(string(HrApplication::PlayStyle))
                    .col(string(HrApplication::FindOut))
                    .col(text(HrApplication::Thesis))
                    .col(integer_null(HrApplication::ReviewerUserId))
                    .col(integer_null(HrApplication::LastUserId))
                    .col(boolean(HrApplication::Hidden).default(false))
                    .col(boolean(HrApplication::Training).default(false))
                    .col(timestamp(HrApplication::CreatedAt))
                    .col(timestamp_null(HrApplication::LastActionAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HR_APPLICATION_USER_ID)
                    .table(HrApplication::Table)
                    .col(HrApplication::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HR_APPLICATION_STATUS)
                    .table(HrApplication::Table)
                    .col(HrApplication::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_APPLICATION_USER_ID)
                    .from_tbl(HrApplication::Table)
                    .from_col(HrApplication::UserId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_APPLICATION_REVIEWER_USER_ID)
                    .from_tbl(HrApplication::Table)
                    .from_col(HrApplication::ReviewerUserId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_APPLICATION_LAST_USER_ID)
                    .from_tbl(HrApplication::Table)
                    .from_col(HrApplication::LastUserId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_HR_APPLICATION_LAST_USER_ID,
            FK_HR_APPLICATION_REVIEWER_USER_ID,
            FK_HR_APPLICATION_USER_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(HrApplication::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_HR_APPLICATION_STATUS, IDX_HR_APPLICATION_USER_ID] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(HrApplication::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(HrApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HrApplication {
    Table,
    Id,
    UserId,
    MainCharacterName,
    Status,
    HowLongPlaying,
    PlayStyle,
    FindOut,
    Thesis,
    ReviewerUserId,
    LastUserId,
    Hidden,
    Training,
    CreatedAt,
    LastActionAt,
}
