use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::blacklist::CreateBlacklistEntryDto,
    server::{data::page_index, model::db::BlacklistCharacterModel},
};

pub struct BlacklistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlacklistRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a blacklist entry, empty optional fields are stored as NULL
    pub async fn create(
        &self,
        creator_id: Option<i32>,
        entry: CreateBlacklistEntryDto,
    ) -> Result<BlacklistCharacterModel, DbErr> {
        entity::blacklist_character::ActiveModel {
            name: ActiveValue::Set(entry.name.trim().to_string()),
            main_name: ActiveValue::Set(non_empty(entry.main_name)),
            corporation: ActiveValue::Set(non_empty(entry.corporation)),
            alliance: ActiveValue::Set(non_empty(entry.alliance)),
            notes: ActiveValue::Set(non_empty(entry.notes)),
            ip_address: ActiveValue::Set(non_empty(entry.ip_address)),
            creator_id: ActiveValue::Set(creator_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Entries newest first, `page` is 1-based
    pub async fn get_page(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<BlacklistCharacterModel>, u64), DbErr> {
        let paginator = entity::prelude::BlacklistCharacter::find()
            .order_by_desc(entity::blacklist_character::Column::Id)
            .paginate(self.db, per_page.max(1));

        let total_pages = paginator.num_pages().await?;
        let entries = paginator
            .fetch_page(page_index(page, total_pages))
            .await?;

        Ok((entries, total_pages))
    }

    /// Distinct, non-empty IP addresses recorded on the blacklist
    pub async fn get_distinct_ip_addresses(&self) -> Result<Vec<String>, DbErr> {
        let ips: Vec<Option<String>> = entity::prelude::BlacklistCharacter::find()
            .select_only()
            .column(entity::blacklist_character::Column::IpAddress)
            .distinct()
            .filter(entity::blacklist_character::Column::IpAddress.is_not_null())
            .filter(entity::blacklist_character::Column::IpAddress.ne(""))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ips.into_iter().flatten().collect())
    }

    /// Entries whose name exactly matches one of `names`
    pub async fn get_matching_names(
        &self,
        names: Vec<String>,
    ) -> Result<Vec<BlacklistCharacterModel>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BlacklistCharacter::find()
            .filter(entity::blacklist_character::Column::Name.is_in(names))
            .order_by_asc(entity::blacklist_character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, entry_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BlacklistCharacter::delete_by_id(entry_id)
            .exec(self.db)
            .await
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
