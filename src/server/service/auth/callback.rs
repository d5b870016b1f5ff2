use dioxus_logger::tracing;
use oauth2::TokenResponse;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{eve::character::CharacterRepository, user::UserRepository},
    error::{auth::AuthError, Error},
    model::db::EveCharacterModel,
};

/// Character identity taken from validated SSO token claims
#[derive(Clone, Debug)]
pub struct SsoCharacter {
    pub character_id: i64,
    pub name: String,
    /// Changes whenever the character is sold to another EVE account
    pub owner_hash: String,
}

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> CallbackService<'a> {
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Exchanges the authorization code and logs in the character it belongs to
    ///
    /// # Arguments
    /// - `code` - Authorization code from the SSO callback
    /// - `maybe_user_id` - User already logged in, if any
    /// - `ip_address` - Client IP recorded as the current login IP
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the user now logged in
    /// - `Err(Error::EsiError)` - Token exchange or validation failed
    /// - `Err(Error::DbErr)` - Database error
    pub async fn handle_callback(
        &self,
        code: &str,
        maybe_user_id: Option<i32>,
        ip_address: &str,
    ) -> Result<i32, Error> {
        let token = self.esi_client.oauth2().get_token(code).await?;

        let claims = self
            .esi_client
            .oauth2()
            .validate_token(token.access_token().secret().to_string())
            .await?;

        let character = SsoCharacter {
            character_id: claims.character_id()?,
            name: claims.name,
            owner_hash: claims.owner,
        };

        self.login_character(character, maybe_user_id, ip_address)
            .await
    }

    /// Resolves the user for an authenticated character and records the login
    ///
    /// # Behavior
    /// - Logged in: the character is linked to the current user, transferring it from any
    ///   other owner. The character becomes the main character if the user has none.
    /// - Not logged in, character owned and owner hash unchanged: logs in as the owner.
    /// - Not logged in, character unknown, unowned or sold (owner hash changed): a new user is
    ///   created with the character as main.
    ///
    /// Transfers append the previous owner to the character's ownership history.
    pub async fn login_character(
        &self,
        character: SsoCharacter,
        maybe_user_id: Option<i32>,
        ip_address: &str,
    ) -> Result<i32, Error> {
        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        let existing = character_repo
            .get_by_character_id(character.character_id)
            .await?;

        let user_id = match maybe_user_id {
            Some(user_id) => {
                let Some(user) = user_repo.get_model(user_id).await? else {
                    return Err(AuthError::UserNotInDatabase(user_id).into());
                };

                let model = match existing {
                    Some(model) => {
                        if let Some(previous_owner) = model.user_id.filter(|id| *id != user_id) {
                            release_character(&txn, &model, previous_owner).await?;
                        }

                        character_repo
                            .update_owner(
                                model,
                                Some(user_id),
                                Some(character.owner_hash),
                                character.name,
                            )
                            .await?
                    }
                    None => {
                        character_repo
                            .create(
                                character.character_id,
                                character.name,
                                Some(character.owner_hash),
                                Some(user_id),
                            )
                            .await?
                    }
                };

                if user.main_character_id.is_none() {
                    user_repo.set_main_character(user_id, Some(model.id)).await?;
                }

                user_id
            }
            None => match existing {
                Some(model) if is_same_owner(&model, &character.owner_hash) => {
                    let owner_id = model.user_id.unwrap_or_default();

                    character_repo
                        .update_owner(
                            model,
                            Some(owner_id),
                            Some(character.owner_hash),
                            character.name,
                        )
                        .await?;

                    owner_id
                }
                Some(model) => {
                    if let Some(previous_owner) = model.user_id {
                        tracing::debug!(
                            "Owner hash changed for character ID {}, moving it to a new user",
                            model.character_id
                        );

                        release_character(&txn, &model, previous_owner).await?;
                    }

                    let user = user_repo.create(Some(model.id)).await?;
                    character_repo
                        .update_owner(
                            model,
                            Some(user.id),
                            Some(character.owner_hash),
                            character.name,
                        )
                        .await?;

                    user.id
                }
                None => {
                    let model = character_repo
                        .create(
                            character.character_id,
                            character.name,
                            Some(character.owner_hash),
                            None,
                        )
                        .await?;

                    let user = user_repo.create(Some(model.id)).await?;
                    character_repo
                        .update_owner(
                            model.clone(),
                            Some(user.id),
                            model.owner_hash,
                            model.name,
                        )
                        .await?;

                    user.id
                }
            },
        };

        user_repo.record_login(user_id, ip_address).await?;

        txn.commit().await?;

        Ok(user_id)
    }
}

/// The character has an owner whose recorded hash matches, or none was ever recorded
fn is_same_owner(character: &EveCharacterModel, owner_hash: &str) -> bool {
    character.user_id.is_some()
        && character
            .owner_hash
            .as_deref()
            .map_or(true, |hash| hash == owner_hash)
}

/// Records the previous owner and unsets their main character if it was this one
async fn release_character<C: ConnectionTrait>(
    db: &C,
    character: &EveCharacterModel,
    previous_owner: i32,
) -> Result<(), Error> {
    let character_repo = CharacterRepository::new(db);
    let user_repo = UserRepository::new(db);

    character_repo
        .record_previous_user(character.id, previous_owner)
        .await?;

    if let Some(previous_user) = user_repo.get_model(previous_owner).await? {
        if previous_user.main_character_id == Some(character.id) {
            user_repo.set_main_character(previous_owner, None).await?;
        }
    }

    Ok(())
}
