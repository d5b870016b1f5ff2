//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// Recruit user account with login metadata and an optional main character.
pub type UserModel = entity::recruit_user::Model;

/// Named role such as `admin` or `reviewer`.
pub type RoleModel = entity::role::Model;

/// EVE Online character, optionally owned by a user.
pub type EveCharacterModel = entity::eve_character::Model;

/// EVE Online corporation record.
pub type EveCorporationModel = entity::eve_corporation::Model;

/// EVE Online alliance record.
pub type EveAllianceModel = entity::eve_alliance::Model;

/// Legacy EVE API key pair registered by a user.
pub type EveApiKeyPairModel = entity::eve_api_key_pair::Model;

/// Recruitment application.
pub type ApplicationModel = entity::hr_application::Model;

/// Reviewer comment on an application.
pub type CommentModel = entity::hr_application_comment::Model;

/// Internal blacklist entry.
pub type BlacklistCharacterModel = entity::blacklist_character::Model;

/// Cached GSF blacklist status for a character.
pub type BlacklistGsfModel = entity::blacklist_gsf::Model;
