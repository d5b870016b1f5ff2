//! EVE fixtures: characters, ownership history, corporations and API key pairs.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{
    constant::TEST_OWNER_HASH,
    error::TestError,
    model::{
        EveApiKeyPairModel, EveCharacterModel, EveCharacterPreviousUserModel, EveCorporationModel,
    },
    TestContext,
};

impl TestContext {
    pub fn eve(&self) -> EveFixtures<'_> {
        EveFixtures { context: self }
    }
}

pub struct EveFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> EveFixtures<'a> {
    /// Insert a character, owned by `user_id` with the test owner hash when given
    pub async fn insert_character(
        &self,
        character_id: i64,
        name: &str,
        user_id: Option<i32>,
    ) -> Result<EveCharacterModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::EveCharacter::insert(entity::eve_character::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                name: ActiveValue::Set(name.to_string()),
                corporation_id: ActiveValue::Set(None),
                api_key_pair_id: ActiveValue::Set(None),
                user_id: ActiveValue::Set(user_id),
                owner_hash: ActiveValue::Set(user_id.map(|_| TEST_OWNER_HASH.to_string())),
                skillpoints: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Record `user_id` as a previous owner of the character
    pub async fn insert_previous_user(
        &self,
        character_pk: i32,
        user_id: i32,
    ) -> Result<EveCharacterPreviousUserModel, TestError> {
        Ok(entity::prelude::EveCharacterPreviousUser::insert(
            entity::eve_character_previous_user::ActiveModel {
                character_id: ActiveValue::Set(character_pk),
                user_id: ActiveValue::Set(user_id),
                recorded_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a corporation without an alliance
    pub async fn insert_corporation(
        &self,
        corporation_id: i64,
        name: &str,
    ) -> Result<EveCorporationModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::EveCorporation::insert(entity::eve_corporation::ActiveModel {
                corporation_id: ActiveValue::Set(corporation_id),
                name: ActiveValue::Set(name.to_string()),
                ticker: ActiveValue::Set("TICK".to_string()),
                member_count: ActiveValue::Set(None),
                is_blue: ActiveValue::Set(false),
                alliance_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn set_character_corporation(
        &self,
        character_pk: i32,
        corporation_pk: i32,
    ) -> Result<EveCharacterModel, TestError> {
        let character = entity::eve_character::ActiveModel {
            id: ActiveValue::Unchanged(character_pk),
            corporation_id: ActiveValue::Set(Some(corporation_pk)),
            ..Default::default()
        };

        Ok(character.update(&self.context.db).await?)
    }

    /// Insert a valid API key pair owned by `user_id`
    pub async fn insert_api_key(
        &self,
        user_id: i32,
        api_id: i64,
    ) -> Result<EveApiKeyPairModel, TestError> {
        Ok(
            entity::prelude::EveApiKeyPair::insert(entity::eve_api_key_pair::ActiveModel {
                api_id: ActiveValue::Set(api_id),
                api_key: ActiveValue::Set(format!("key-{}", api_id)),
                user_id: ActiveValue::Set(Some(user_id)),
                valid: ActiveValue::Set(true),
                last_update_time: ActiveValue::Set(None),
                last_scraped_time: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
