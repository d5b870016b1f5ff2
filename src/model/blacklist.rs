use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlacklistEntryDto {
    pub id: i32,
    pub name: String,
    pub main_name: Option<String>,
    pub corporation: Option<String>,
    pub alliance: Option<String>,
    pub notes: Option<String>,
    pub ip_address: Option<String>,
    pub creator_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateBlacklistEntryDto {
    pub name: String,
    pub main_name: Option<String>,
    pub corporation: Option<String>,
    pub alliance: Option<String>,
    pub notes: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlacklistPageDto {
    pub page: u64,
    pub total_pages: u64,
    pub entries: Vec<BlacklistEntryDto>,
}

/// Cached GSF blacklist result for one character
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GsfStatusDto {
    pub character_name: String,
    pub status: String,
}
