//! Blacklist fixtures: internal entries and cached GSF statuses.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{BlacklistCharacterModel, BlacklistGsfModel},
    TestContext,
};

impl TestContext {
    pub fn blacklist(&self) -> BlacklistFixtures<'_> {
        BlacklistFixtures { context: self }
    }
}

pub struct BlacklistFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> BlacklistFixtures<'a> {
    /// Insert an entry for a character name, optionally with a recorded IP address
    pub async fn insert_entry(
        &self,
        name: &str,
        ip_address: Option<&str>,
    ) -> Result<BlacklistCharacterModel, TestError> {
        Ok(entity::prelude::BlacklistCharacter::insert(
            entity::blacklist_character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                main_name: ActiveValue::Set(None),
                corporation: ActiveValue::Set(None),
                alliance: ActiveValue::Set(None),
                notes: ActiveValue::Set(None),
                ip_address: ActiveValue::Set(ip_address.map(str::to_string)),
                creator_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Cache a GSF status for a character as of `last_update_time`
    pub async fn insert_gsf_status(
        &self,
        character_pk: i32,
        status: &str,
        last_update_time: NaiveDateTime,
    ) -> Result<BlacklistGsfModel, TestError> {
        Ok(
            entity::prelude::BlacklistGsf::insert(entity::blacklist_gsf::ActiveModel {
                character_id: ActiveValue::Set(character_pk),
                status: ActiveValue::Set(status.to_string()),
                last_update_time: ActiveValue::Set(last_update_time),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
