use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    /// EVE Online ID of the main character, absent until one is chosen
    pub character_id: Option<i64>,
    pub character_name: Option<String>,
    pub roles: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i64,
    pub name: String,
    pub corporation: Option<String>,
    pub skillpoints: Option<i64>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiKeyDto {
    pub api_id: i64,
    pub valid: bool,
    pub last_update_time: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddApiKeyDto {
    pub api_id: i64,
    pub api_key: String,
    /// EVE Online IDs of the user's characters covered by this key
    #[serde(default)]
    pub character_ids: Vec<i64>,
}
