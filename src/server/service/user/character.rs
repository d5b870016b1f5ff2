use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::user::CharacterDto,
    server::{
        data::{
            eve::{character::CharacterRepository, corporation::CorporationRepository},
            user::UserRepository,
        },
        error::{recruit::RecruitError, Error},
        model::db::EveCharacterModel,
    },
};

pub struct UserCharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserCharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Characters currently owned by the user
    pub async fn get_user_characters(&self, user_id: i32) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db)
            .get_owned_by_user(user_id)
            .await?;

        to_character_dtos(self.db, characters).await
    }

    /// Sets the user's main character
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The new main character
    /// - `Err(RecruitError::CharacterNotOwned)` - Character is unknown or owned by someone else
    pub async fn set_main_character(
        &self,
        user_id: i32,
        character_id: i64,
    ) -> Result<CharacterDto, Error> {
        let Some(character) = CharacterRepository::new(self.db)
            .get_by_character_id(character_id)
            .await?
            .filter(|character| character.user_id == Some(user_id))
        else {
            return Err(RecruitError::CharacterNotOwned(character_id).into());
        };

        if UserRepository::new(self.db)
            .set_main_character(user_id, Some(character.id))
            .await?
            .is_none()
        {
            return Err(RecruitError::UserNotFound(user_id).into());
        }

        let mut dtos = to_character_dtos(self.db, vec![character]).await?;

        dtos.pop().ok_or_else(|| {
            Error::InternalError(format!(
                "Character ID {} lost while converting to DTO",
                character_id
            ))
        })
    }
}

/// Converts characters to DTOs, resolving corporation names in a single query
pub async fn to_character_dtos<C: ConnectionTrait>(
    db: &C,
    characters: Vec<EveCharacterModel>,
) -> Result<Vec<CharacterDto>, Error> {
    let corporation_ids: Vec<i32> = characters
        .iter()
        .filter_map(|character| character.corporation_id)
        .collect();

    let corporations: HashMap<i32, String> = if corporation_ids.is_empty() {
        HashMap::new()
    } else {
        CorporationRepository::new(db)
            .get_many_by_ids(corporation_ids)
            .await?
            .into_iter()
            .map(|corporation| (corporation.id, corporation.name))
            .collect()
    };

    Ok(characters
        .into_iter()
        .map(|character| CharacterDto {
            id: character.character_id,
            corporation: character
                .corporation_id
                .and_then(|id| corporations.get(&id).cloned()),
            name: character.name,
            skillpoints: character.skillpoints,
        })
        .collect())
}
