use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{data::contains_ignore_case, model::db::EveCharacterModel};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        character_id: i64,
        name: String,
        owner_hash: Option<String>,
        user_id: Option<i32>,
    ) -> Result<EveCharacterModel, DbErr> {
        let now = Utc::now().naive_utc();
        let character = entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            name: ActiveValue::Set(name),
            corporation_id: ActiveValue::Set(None),
            api_key_pair_id: ActiveValue::Set(None),
            user_id: ActiveValue::Set(user_id),
            owner_hash: ActiveValue::Set(owner_hash),
            skillpoints: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Get a character using its EVE Online character ID
    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<EveCharacterModel>, DbErr> {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Get characters using their EVE Online character IDs, unknown IDs are skipped
    pub async fn get_many_by_character_ids(
        &self,
        character_ids: &[i64],
    ) -> Result<Vec<EveCharacterModel>, DbErr> {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.is_in(character_ids.to_vec()))
            .order_by_asc(entity::eve_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Characters currently owned by the user, grouped by API key
    pub async fn get_owned_by_user(&self, user_id: i32) -> Result<Vec<EveCharacterModel>, DbErr> {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::eve_character::Column::ApiKeyPairId)
            .order_by_asc(entity::eve_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Characters the user owned in the past but no longer owns
    pub async fn get_previously_owned_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<EveCharacterModel>, DbErr> {
        let character_ids: HashSet<i32> = entity::prelude::EveCharacterPreviousUser::find()
            .filter(entity::eve_character_previous_user::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|previous| previous.character_id)
            .collect();

        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::Id.is_in(character_ids))
            .filter(
                entity::eve_character::Column::UserId
                    .ne(user_id)
                    .or(entity::eve_character::Column::UserId.is_null()),
            )
            .order_by_asc(entity::eve_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Record IDs of characters whose name contains `search`
    pub async fn find_ids_by_name(&self, search: &str) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::EveCharacter::find()
            .filter(contains_ignore_case(
                entity::eve_character::Column::Name,
                search,
            ))
            .all(self.db)
            .await?
            .into_iter()
            .map(|character| character.id)
            .collect())
    }

    /// Owning user IDs of characters whose name contains `search`
    pub async fn find_owner_ids_by_name(&self, search: &str) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::EveCharacter::find()
            .filter(contains_ignore_case(
                entity::eve_character::Column::Name,
                search,
            ))
            .filter(entity::eve_character::Column::UserId.is_not_null())
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|character| character.user_id)
            .collect())
    }

    /// Sets a new owner and owner hash on the character, keeping its name in sync with SSO
    pub async fn update_owner(
        &self,
        character: EveCharacterModel,
        user_id: Option<i32>,
        owner_hash: Option<String>,
        name: String,
    ) -> Result<EveCharacterModel, DbErr> {
        let mut character_am = character.into_active_model();
        character_am.user_id = ActiveValue::Set(user_id);
        character_am.owner_hash = ActiveValue::Set(owner_hash);
        character_am.name = ActiveValue::Set(name);
        character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        character_am.update(self.db).await
    }

    /// Appends a user to the character's ownership history
    pub async fn record_previous_user(
        &self,
        character_id: i32,
        user_id: i32,
    ) -> Result<entity::eve_character_previous_user::Model, DbErr> {
        entity::eve_character_previous_user::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            user_id: ActiveValue::Set(user_id),
            recorded_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Detaches every character from an API key pair about to be removed
    pub async fn clear_api_key_pair(&self, api_key_pair_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EveCharacter::update_many()
            .col_expr(
                entity::eve_character::Column::ApiKeyPairId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::eve_character::Column::ApiKeyPairId.eq(api_key_pair_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links the character to the API key pair covering it
    pub async fn set_api_key_pair(
        &self,
        character: EveCharacterModel,
        api_key_pair_id: Option<i32>,
    ) -> Result<EveCharacterModel, DbErr> {
        let mut character_am = character.into_active_model();
        character_am.api_key_pair_id = ActiveValue::Set(api_key_pair_id);
        character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        character_am.update(self.db).await
    }
}
