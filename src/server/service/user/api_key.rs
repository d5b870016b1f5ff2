use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{AddApiKeyDto, ApiKeyDto},
    server::{
        data::eve::{api_key::ApiKeyRepository, character::CharacterRepository},
        error::{recruit::RecruitError, Error},
        model::db::EveApiKeyPairModel,
    },
};

pub struct ApiKeyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_api_keys(&self, user_id: i32) -> Result<Vec<ApiKeyDto>, Error> {
        Ok(ApiKeyRepository::new(self.db)
            .get_for_user(user_id)
            .await?
            .into_iter()
            .map(to_api_key_dto)
            .collect())
    }

    /// Registers an API key pair for the user and links the listed characters to it
    ///
    /// # Returns
    /// - `Err(RecruitError::ApiKeyAlreadyExists)` - The API ID is already registered by anyone
    /// - `Err(RecruitError::CharacterNotOwned)` - A listed character isn't owned by the user,
    ///   nothing is stored
    pub async fn add_api_key(&self, user_id: i32, api_key: AddApiKeyDto) -> Result<ApiKeyDto, Error> {
        let txn = self.db.begin().await?;
        let api_key_repo = ApiKeyRepository::new(&txn);
        let character_repo = CharacterRepository::new(&txn);

        if api_key_repo.get_by_api_id(api_key.api_id).await?.is_some() {
            return Err(RecruitError::ApiKeyAlreadyExists(api_key.api_id).into());
        }

        let characters = character_repo
            .get_many_by_character_ids(&api_key.character_ids)
            .await?;

        for character_id in &api_key.character_ids {
            let owned = characters
                .iter()
                .any(|c| c.character_id == *character_id && c.user_id == Some(user_id));

            if !owned {
                return Err(RecruitError::CharacterNotOwned(*character_id).into());
            }
        }

        let model = api_key_repo
            .create(user_id, api_key.api_id, api_key.api_key)
            .await?;

        for character in characters {
            character_repo
                .set_api_key_pair(character, Some(model.id))
                .await?;
        }

        txn.commit().await?;

        Ok(to_api_key_dto(model))
    }

    /// Removes one of the user's API key pairs and unlinks its characters, keys of other
    /// users are reported as missing
    pub async fn remove_api_key(&self, user_id: i32, api_id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let api_key_repo = ApiKeyRepository::new(&txn);

        let Some(model) = api_key_repo
            .get_by_api_id(api_id)
            .await?
            .filter(|model| model.user_id == Some(user_id))
        else {
            return Err(RecruitError::ApiKeyNotFound(api_id).into());
        };

        CharacterRepository::new(&txn)
            .clear_api_key_pair(model.id)
            .await?;
        api_key_repo.delete(model.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn to_api_key_dto(model: EveApiKeyPairModel) -> ApiKeyDto {
    ApiKeyDto {
        api_id: model.api_id,
        valid: model.valid,
        last_update_time: model.last_update_time,
    }
}
