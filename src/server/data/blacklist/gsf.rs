use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::db::BlacklistGsfModel;

pub struct GsfRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GsfRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Cached GSF status for a character record ID
    pub async fn get_by_character(
        &self,
        character_id: i32,
    ) -> Result<Option<BlacklistGsfModel>, DbErr> {
        entity::prelude::BlacklistGsf::find()
            .filter(entity::blacklist_gsf::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Stores the status and refreshes the cache timestamp
    pub async fn upsert(
        &self,
        character_id: i32,
        status: String,
    ) -> Result<BlacklistGsfModel, DbErr> {
        let entry = entity::blacklist_gsf::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            status: ActiveValue::Set(status),
            last_update_time: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::BlacklistGsf::insert(entry)
            .on_conflict(
                OnConflict::column(entity::blacklist_gsf::Column::CharacterId)
                    .update_columns([
                        entity::blacklist_gsf::Column::Status,
                        entity::blacklist_gsf::Column::LastUpdateTime,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use recruit_test_utils::prelude::*;

    use crate::server::data::blacklist::gsf::GsfRepository;

    /// Expect a second upsert to replace the status of the same row
    #[tokio::test]
    async fn upsert_replaces_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_recruit_tables().build().await?;
        let character = test.eve().insert_character(1, "Pilot", None).await?;
        let gsf_repo = GsfRepository::new(&test.db);

        let first = gsf_repo.upsert(character.id, "NOT FOUND".into()).await?;
        let second = gsf_repo.upsert(character.id, "BLACKLISTED".into()).await?;

        assert_eq!(first.id, second.id);
        let cached = gsf_repo.get_by_character(character.id).await?.unwrap();
        assert_eq!(cached.status, "BLACKLISTED");

        Ok(())
    }
}
