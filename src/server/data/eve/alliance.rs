use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::db::EveAllianceModel;

pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or updates an alliance keyed by its EVE Online alliance ID
    pub async fn upsert(
        &self,
        alliance_id: i64,
        name: String,
        ticker: String,
        executor_corporation_id: Option<i64>,
        member_count: Option<i32>,
        is_blue: bool,
    ) -> Result<EveAllianceModel, DbErr> {
        let now = Utc::now().naive_utc();
        let alliance = entity::eve_alliance::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            name: ActiveValue::Set(name),
            ticker: ActiveValue::Set(ticker),
            executor_corporation_id: ActiveValue::Set(executor_corporation_id),
            is_blue: ActiveValue::Set(is_blue),
            member_count: ActiveValue::Set(member_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::EveAlliance::insert(alliance)
            .on_conflict(
                OnConflict::column(entity::eve_alliance::Column::AllianceId)
                    .update_columns([
                        entity::eve_alliance::Column::Name,
                        entity::eve_alliance::Column::Ticker,
                        entity::eve_alliance::Column::ExecutorCorporationId,
                        entity::eve_alliance::Column::IsBlue,
                        entity::eve_alliance::Column::MemberCount,
                        entity::eve_alliance::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Get an alliance using its EVE Online alliance ID
    pub async fn get_by_alliance_id(
        &self,
        alliance_id: i64,
    ) -> Result<Option<EveAllianceModel>, DbErr> {
        entity::prelude::EveAlliance::find()
            .filter(entity::eve_alliance::Column::AllianceId.eq(alliance_id))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use recruit_test_utils::prelude::*;

    use crate::server::data::eve::alliance::AllianceRepository;

    /// Expect an upserted alliance to be found by its EVE ID
    #[tokio::test]
    async fn upserted_alliance_is_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_recruit_tables().build().await?;
        let alliance_repo = AllianceRepository::new(&test.db);

        alliance_repo
            .upsert(99_000_001, "Alliance".into(), "ALLY".into(), None, Some(100), false)
            .await?;
        let found = alliance_repo.get_by_alliance_id(99_000_001).await?;

        assert_eq!(found.unwrap().ticker, "ALLY");

        Ok(())
    }
}
