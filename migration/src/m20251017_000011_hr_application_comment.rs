use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_recruit_user::RecruitUser, m20251017_000009_hr_application::HrApplication,
};

static IDX_HR_APPLICATION_COMMENT_APPLICATION_ID: &str =
    "idx-hr_application_comment-application_id";
static FK_HR_APPLICATION_COMMENT_APPLICATION_ID: &str =
    "fk-hr_application_comment-application_id";
static FK_HR_APPLICATION_COMMENT_USER_ID: &str = "fk-hr_application_comment-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HrApplicationComment::Table)
                    .if_not_exists()
                    .col(pk_auto(HrApplicationComment::Id))
                    .col(integer(HrApplicationComment::ApplicationId))
                    .col(integer(HrApplicationComment::UserId))
                    .col(text(HrApplicationComment::Comment))
                    .col(timestamp(HrApplicationComment::CreatedAt))
                    .col(timestamp_null(HrApplicationComment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HR_APPLICATION_COMMENT_APPLICATION_ID)
                    .table(HrApplicationComment::Table)
                    .col(HrApplicationComment::ApplicationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_APPLICATION_COMMENT_APPLICATION_ID)
                    .from_tbl(HrApplicationComment::Table)
                    .from_col(HrApplicationComment::ApplicationId)
                    .to_tbl(HrApplication::Table)
                    .to_col(HrApplication::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_APPLICATION_COMMENT_USER_ID)
                    .from_tbl(HrApplicationComment::Table)
                    .from_col(HrApplicationComment::UserId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_HR_APPLICATION_COMMENT_USER_ID,
            FK_HR_APPLICATION_COMMENT_APPLICATION_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(HrApplicationComment::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HR_APPLICATION_COMMENT_APPLICATION_ID)
                    .table(HrApplicationComment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HrApplicationComment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HrApplicationComment {
    Table,
    Id,
    ApplicationId,
    UserId,
    Comment,
    CreatedAt,
    UpdatedAt,
}
