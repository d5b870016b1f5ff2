use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000007_eve_character::EveCharacter;

static FK_BLACKLIST_GSF_CHARACTER_ID: &str = "fk-blacklist_gsf-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistGsf::Table)
                    .if_not_exists()
                    .col(pk_auto(BlacklistGsf::Id))
                    .col(integer_uniq(BlacklistGsf::CharacterId))
                    .col(string(BlacklistGsf::Status))
                    .col(timestamp(BlacklistGsf::LastUpdateTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLACKLIST_GSF_CHARACTER_ID)
                    .from_tbl(BlacklistGsf::Table)
                    .from_col(BlacklistGsf::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
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
                    .name(FK_BLACKLIST_GSF_CHARACTER_ID)
                    .table(BlacklistGsf::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlacklistGsf::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BlacklistGsf {
    Table,
    Id,
    CharacterId,
    Status,
    LastUpdateTime,
}
