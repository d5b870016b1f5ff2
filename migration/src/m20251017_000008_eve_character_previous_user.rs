use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_recruit_user::RecruitUser, m20251017_000007_eve_character::EveCharacter,
};

static IDX_PREVIOUS_USER_CHARACTER_ID: &str = "idx-eve_character_previous_user-character_id";
static IDX_PREVIOUS_USER_USER_ID: &str = "idx-eve_character_previous_user-user_id";
static FK_PREVIOUS_USER_CHARACTER_ID: &str = "fk-eve_character_previous_user-character_id";
static FK_PREVIOUS_USER_USER_ID: &str = "fk-eve_character_previous_user-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCharacterPreviousUser::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacterPreviousUser::Id))
                    .col(integer(EveCharacterPreviousUser::CharacterId))
                    .col(integer(EveCharacterPreviousUser::UserId))
                    .col(timestamp(EveCharacterPreviousUser::RecordedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PREVIOUS_USER_CHARACTER_ID)
                    .table(EveCharacterPreviousUser::Table)
                    .col(EveCharacterPreviousUser::CharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PREVIOUS_USER_USER_ID)
                    .table(EveCharacterPreviousUser::Table)
                    .col(EveCharacterPreviousUser::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PREVIOUS_USER_CHARACTER_ID)
                    .from_tbl(EveCharacterPreviousUser::Table)
                    .from_col(EveCharacterPreviousUser::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PREVIOUS_USER_USER_ID)
                    .from_tbl(EveCharacterPreviousUser::Table)
                    .from_col(EveCharacterPreviousUser::UserId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_PREVIOUS_USER_USER_ID, FK_PREVIOUS_USER_CHARACTER_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(EveCharacterPreviousUser::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_PREVIOUS_USER_USER_ID, IDX_PREVIOUS_USER_CHARACTER_ID] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(EveCharacterPreviousUser::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(
                Table::drop()
                    .table(EveCharacterPreviousUser::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EveCharacterPreviousUser {
    Table,
    Id,
    CharacterId,
    UserId,
    RecordedAt,
}
