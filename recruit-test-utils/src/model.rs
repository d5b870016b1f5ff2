//! Short aliases for the entity models returned by the fixtures.

pub type UserModel = entity::recruit_user::Model;
pub type RoleModel = entity::role::Model;
pub type EveCharacterModel = entity::eve_character::Model;
pub type EveCharacterPreviousUserModel = entity::eve_character_previous_user::Model;
pub type EveCorporationModel = entity::eve_corporation::Model;
pub type EveApiKeyPairModel = entity::eve_api_key_pair::Model;
pub type ApplicationModel = entity::hr_application::Model;
pub type ApplicationCharacterModel = entity::hr_application_character::Model;
pub type CommentModel = entity::hr_application_comment::Model;
pub type BlacklistCharacterModel = entity::blacklist_character::Model;
pub type BlacklistGsfModel = entity::blacklist_gsf::Model;
