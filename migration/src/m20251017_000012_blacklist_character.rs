use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_recruit_user::RecruitUser;

static IDX_BLACKLIST_CHARACTER_NAME: &str = "idx-blacklist_character-name";
static FK_BLACKLIST_CHARACTER_CREATOR_ID: &str = "fk-blacklist_character-creator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(BlacklistCharacter::Id))
                    .col(string(BlacklistCharacter::Name))
                    .col(string_null(BlacklistCharacter::MainName))
                    .col(string_null(BlacklistCharacter::Corporation))
                    .col(string_null(BlacklistCharacter::Alliance))
                    .col(text_null(BlacklistCharacter::Notes))
                    .col(string_null(BlacklistCharacter::IpAddress))
                    .col(integer_null(BlacklistCharacter::CreatorId))
                    .col(timestamp(BlacklistCharacter::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BLACKLIST_CHARACTER_NAME)
                    .table(BlacklistCharacter::Table)
                    .col(BlacklistCharacter::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLACKLIST_CHARACTER_CREATOR_ID)
                    .from_tbl(BlacklistCharacter::Table)
                    .from_col(BlacklistCharacter::CreatorId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BLACKLIST_CHARACTER_CREATOR_ID)
                    .table(BlacklistCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLACKLIST_CHARACTER_NAME)
                    .table(BlacklistCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlacklistCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BlacklistCharacter {
    Table,
    Id,
    Name,
    MainName,
    Corporation,
    Alliance,
    Notes,
    IpAddress,
    CreatorId,
    CreatedAt,
}
