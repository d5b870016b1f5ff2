use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000007_eve_character::EveCharacter, m20251017_000009_hr_application::HrApplication,
};

static FK_HR_APPLICATION_CHARACTER_APPLICATION_ID: &str =
    "fk-hr_application_character-application_id";
static FK_HR_APPLICATION_CHARACTER_CHARACTER_ID: &str =
    "fk-hr_application_character-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HrApplicationCharacter::Table)
                    .if_not_exists()
                    .col(integer(HrApplicationCharacter::ApplicationId))
                    .col(integer(HrApplicationCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(HrApplicationCharacter::ApplicationId)
                            .col(HrApplicationCharacter::CharacterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_APPLICATION_CHARACTER_APPLICATION_ID)
                    .from_tbl(HrApplicationCharacter::Table)
                    .from_col(HrApplicationCharacter::ApplicationId)
                    .to_tbl(HrApplication::Table)
                    .to_col(HrApplication::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HR_APPLICATION_CHARACTER_CHARACTER_ID)
                    .from_tbl(HrApplicationCharacter::Table)
                    .from_col(HrApplicationCharacter::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_HR_APPLICATION_CHARACTER_CHARACTER_ID,
            FK_HR_APPLICATION_CHARACTER_APPLICATION_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(HrApplicationCharacter::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(HrApplicationCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HrApplicationCharacter {
    Table,
    ApplicationId,
    CharacterId,
}
