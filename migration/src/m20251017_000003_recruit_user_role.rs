use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_recruit_user::RecruitUser, m20251017_000002_role::Role};

static FK_RECRUIT_USER_ROLE_USER_ID: &str = "fk-recruit_user_role-user_id";
static FK_RECRUIT_USER_ROLE_ROLE_ID: &str = "fk-recruit_user_role-role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecruitUserRole::Table)
                    .if_not_exists()
                    .col(integer(RecruitUserRole::UserId))
                    .col(integer(RecruitUserRole::RoleId))
                    .primary_key(
                        Index::create()
                            .col(RecruitUserRole::UserId)
                            .col(RecruitUserRole::RoleId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECRUIT_USER_ROLE_USER_ID)
                    .from_tbl(RecruitUserRole::Table)
                    .from_col(RecruitUserRole::UserId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECRUIT_USER_ROLE_ROLE_ID)
                    .from_tbl(RecruitUserRole::Table)
                    .from_col(RecruitUserRole::RoleId)
                    .to_tbl(Role::Table)
                    .to_col(Role::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECRUIT_USER_ROLE_ROLE_ID)
                    .table(RecruitUserRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECRUIT_USER_ROLE_USER_ID)
                    .table(RecruitUserRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecruitUserRole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecruitUserRole {
    Table,
    UserId,
    RoleId,
}
