use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageParams},
        blacklist::{BlacklistEntryDto, BlacklistPageDto, CreateBlacklistEntryDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::blacklist::entry::BlacklistEntryService,
    },
};

pub static BLACKLIST_TAG: &str = "blacklist";

/// List internal blacklist entries, newest first
#[utoipa::path(
    get,
    path = "/api/blacklist",
    tag = BLACKLIST_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "One page of blacklist entries", body = BlacklistPageDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_entries(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;
    current.require_staff("view the blacklist")?;

    let page = BlacklistEntryService::new(&state.db)
        .list_entries(params.page.unwrap_or(1), state.max_number_per_page)
        .await?;

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Add an entry to the internal blacklist
#[utoipa::path(
    post,
    path = "/api/blacklist",
    tag = BLACKLIST_TAG,
    request_body = CreateBlacklistEntryDto,
    responses(
        (status = 201, description = "Entry added", body = BlacklistEntryDto),
        (status = 400, description = "Character name missing", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_entry(
    State(state): State<AppState>,
    session: Session,
    Json(entry): Json<CreateBlacklistEntryDto>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;
    current.require_staff("add blacklist entries")?;

    let entry = BlacklistEntryService::new(&state.db)
        .add_entry(current.id(), entry)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

/// Remove an entry from the internal blacklist, admin only
#[utoipa::path(
    delete,
    path = "/api/blacklist/{entry_id}",
    tag = BLACKLIST_TAG,
    params(("entry_id" = i32, Path, description = "Blacklist entry ID")),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_entry(
    State(state): State<AppState>,
    session: Session,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;
    current.require_admin("remove blacklist entries")?;

    BlacklistEntryService::new(&state.db)
        .remove_entry(entry_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
