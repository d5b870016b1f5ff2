use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AllianceDto {
    pub alliance_id: i64,
    pub name: String,
    pub ticker: String,
    pub executor_corporation_id: Option<i64>,
    pub member_count: Option<i32>,
    pub is_blue: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CorporationDto {
    pub corporation_id: i64,
    pub name: String,
    pub ticker: String,
    pub member_count: Option<i32>,
    pub is_blue: bool,
    /// EVE Online ID of the alliance, which must already be recorded
    pub alliance_id: Option<i64>,
}
