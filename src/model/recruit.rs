use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{api::NoticeDto, blacklist::GsfStatusDto, user::CharacterDto};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub user_id: i32,
    pub main_character_name: String,
    pub status: String,
    pub how_long_playing: String,
    pub play_style: String,
    pub find_out: String,
    pub thesis: String,
    pub reviewer_user_id: Option<i32>,
    pub last_user_id: Option<i32>,
    pub hidden: bool,
    pub training: bool,
    pub created_at: NaiveDateTime,
    pub last_action_at: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationPageDto {
    pub page: u64,
    pub total_pages: u64,
    pub applications: Vec<ApplicationDto>,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateApplicationDto {
    /// EVE Online IDs of the applying characters
    pub characters: Vec<i64>,
    pub how_long_playing: String,
    pub play_style: String,
    pub find_out: String,
    pub thesis: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub application_id: i32,
    pub user_id: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CommentTextDto {
    pub comment: String,
}

/// Application as seen by its owner, or the full review view as seen by staff
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationViewDto {
    pub application: ApplicationDto,
    /// Present for staff only
    pub review: Option<ApplicationReviewDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationReviewDto {
    pub characters: Vec<CharacterDto>,
    pub related_applications: Vec<ApplicationDto>,
    pub comments: Vec<CommentDto>,
    /// Character name to evewho.com search term
    pub evewho: BTreeMap<String, String>,
    pub gsf_blacklist: Vec<GsfStatusDto>,
    pub notices: Vec<NoticeDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationActionDto {
    pub application_id: i32,
    /// New status, or `hidden`, `unhidden`, `deleted`
    pub result: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
pub struct QueueParams {
    pub page: Option<u64>,
    /// 0: current, 1: all, 2: mine
    pub filter: Option<i32>,
    pub search: Option<String>,
}
