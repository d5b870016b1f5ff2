use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_recruit_user::RecruitUser;

static IDX_EVE_API_KEY_PAIR_USER_ID: &str = "idx-eve_api_key_pair-user_id";
static FK_EVE_API_KEY_PAIR_USER_ID: &str = "fk-eve_api_key_pair-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveApiKeyPair::Table)
                    .if_not_exists()
                    .col(pk_auto(EveApiKeyPair::Id))
                    .col(big_integer_uniq(EveApiKeyPair::ApiId))
                    .col(string(EveApiKeyPair::ApiKey))
                    .col(integer_null(EveApiKeyPair::UserId))
                    .col(boolean(EveApiKeyPair::Valid).default(true))
                    .col(timestamp_null(EveApiKeyPair::LastUpdateTime))
                    .col(timestamp_null(EveApiKeyPair::LastScrapedTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_API_KEY_PAIR_USER_ID)
                    .table(EveApiKeyPair::Table)
                    .col(EveApiKeyPair::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVE_API_KEY_PAIR_USER_ID)
                    .from_tbl(EveApiKeyPair::Table)
                    .from_col(EveApiKeyPair::UserId)
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
                    .name(FK_EVE_API_KEY_PAIR_USER_ID)
                    .table(EveApiKeyPair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVE_API_KEY_PAIR_USER_ID)
                    .table(EveApiKeyPair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveApiKeyPair::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveApiKeyPair {
    Table,
    Id,
    ApiId,
    ApiKey,
    UserId,
    Valid,
    LastUpdateTime,
    LastScrapedTime,
}
