use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_recruit_user::RecruitUser,
    m20251017_000005_eve_corporation::EveCorporation,
    m20251017_000006_eve_api_key_pair::EveApiKeyPair,
};

static IDX_EVE_CHARACTER_USER_ID: &str = "idx-eve_character-user_id";
static IDX_EVE_CHARACTER_NAME: &str = "idx-eve_character-name";
static FK_EVE_CHARACTER_CORPORATION_ID: &str = "fk-eve_character-corporation_id";
static FK_EVE_CHARACTER_API_KEY_PAIR_ID: &str = "fk-eve_character-api_key_pair_id";
static FK_EVE_CHARACTER_USER_ID: &str = "fk-eve_character-user_id";
static FK_RECRUIT_USER_MAIN_CHARACTER_ID: &str = "fk-recruit_user-main_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacter::Id))
                    .col(big_integer_uniq(EveCharacter::CharacterId))
                    .col(string(EveCharacter::Name))
                    .col(integer_null(EveCharacter::CorporationId))
                    .col(integer_null(EveCharacter::ApiKeyPairId))
                    .col(integer_null(EveCharacter::UserId))
                    .col(string_null(EveCharacter::OwnerHash))
                    .col(big_integer_null(EveCharacter::Skillpoints))
                    .col(timestamp(EveCharacter::CreatedAt))
                    .col(timestamp(EveCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_CHARACTER_USER_ID)
                    .table(EveCharacter::Table)
                    .col(EveCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_CHARACTER_NAME)
                    .table(EveCharacter::Table)
                    .col(EveCharacter::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_CHARACTER_CORPORATION_ID)
                    .from_tbl(EveCharacter::Table)
                    .from_col(EveCharacter::CorporationId)
                    .to_tbl(EveCorporation::Table)
                    .to_col(EveCorporation::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_CHARACTER_API_KEY_PAIR_ID)
                    .from_tbl(EveCharacter::Table)
                    .from_col(EveCharacter::ApiKeyPairId)
                    .to_tbl(EveApiKeyPair::Table)
                    .to_col(EveApiKeyPair::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_CHARACTER_USER_ID)
                    .from_tbl(EveCharacter::Table)
                    .from_col(EveCharacter::UserId)
                    .to_tbl(RecruitUser::Table)
                    .to_col(RecruitUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        // recruit_user is created before eve_character, so its main character key lands here
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECRUIT_USER_MAIN_CHARACTER_ID)
                    .from_tbl(RecruitUser::Table)
                    .from_col(RecruitUser::MainCharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
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
                    .name(FK_RECRUIT_USER_MAIN_CHARACTER_ID)
                    .table(RecruitUser::Table)
                    .to_owned(),
            )
            .await?;

        for fk in [
            FK_EVE_CHARACTER_USER_ID,
            FK_EVE_CHARACTER_API_KEY_PAIR_ID,
            FK_EVE_CHARACTER_CORPORATION_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(EveCharacter::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_EVE_CHARACTER_NAME, IDX_EVE_CHARACTER_USER_ID] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(EveCharacter::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(EveCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCharacter {
    Table,
    Id,
    CharacterId,
    Name,
    CorporationId,
    ApiKeyPairId,
    UserId,
    OwnerHash,
    Skillpoints,
    CreatedAt,
    UpdatedAt,
}
