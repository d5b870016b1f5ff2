use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::db::EveCorporationModel;

pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or updates a corporation keyed by its EVE Online corporation ID
    #[allow(clippy::too_many_arguments)]
    pub async fn upsert(
        &self,
        corporation_id: i64,
        name: String,
        ticker: String,
        member_count: Option<i32>,
        is_blue: bool,
        alliance_id: Option<i32>,
    ) -> Result<EveCorporationModel, DbErr> {
        let now = Utc::now().naive_utc();
        let corporation = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(name),
            ticker: ActiveValue::Set(ticker),
            member_count: ActiveValue::Set(member_count),
            is_blue: ActiveValue::Set(is_blue),
            alliance_id: ActiveValue::Set(alliance_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::EveCorporation::insert(corporation)
            .on_conflict(
                OnConflict::column(entity::eve_corporation::Column::CorporationId)
                    .update_columns([
                        entity::eve_corporation::Column::Name,
                        entity::eve_corporation::Column::Ticker,
                        entity::eve_corporation::Column::MemberCount,
                        entity::eve_corporation::Column::IsBlue,
                        entity::eve_corporation::Column::AllianceId,
                        entity::eve_corporation::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<EveCorporationModel>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, ids: Vec<i32>) -> Result<Vec<EveCorporationModel>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
