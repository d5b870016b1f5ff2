use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{AddApiKeyDto, ApiKeyDto, CharacterDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::user::{api_key::ApiKeyService, character::UserCharacterService},
    },
};

pub static USER_TAG: &str = "user";

/// Get all characters owned by the logged in user
#[utoipa::path(
    get,
    path = "/api/user/characters",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Characters owned by the user", body = Vec<CharacterDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let characters = UserCharacterService::new(&state.db)
        .get_user_characters(current.id())
        .await?;

    Ok((StatusCode::OK, Json(characters)).into_response())
}

/// Make one of the user's characters their main character
#[utoipa::path(
    put,
    path = "/api/user/main/{character_id}",
    tag = USER_TAG,
    params(("character_id" = i64, Path, description = "EVE Online character ID")),
    responses(
        (status = 200, description = "New main character", body = CharacterDto),
        (status = 400, description = "Character not owned by the user", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_main_character(
    State(state): State<AppState>,
    session: Session,
    Path(character_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let character = UserCharacterService::new(&state.db)
        .set_main_character(current.id(), character_id)
        .await?;

    Ok((StatusCode::OK, Json(character)).into_response())
}

/// List the user's API key pairs
#[utoipa::path(
    get,
    path = "/api/user/api_keys",
    tag = USER_TAG,
    responses(
        (status = 200, description = "API key pairs of the user", body = Vec<ApiKeyDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_api_keys(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let api_keys = ApiKeyService::new(&state.db)
        .list_api_keys(current.id())
        .await?;

    Ok((StatusCode::OK, Json(api_keys)).into_response())
}

/// Register an API key pair for the user, linking the listed characters to it
#[utoipa::path(
    post,
    path = "/api/user/api_keys",
    tag = USER_TAG,
    request_body = AddApiKeyDto,
    responses(
        (status = 201, description = "API key pair added", body = ApiKeyDto),
        (status = 400, description = "Character not owned by the user", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "API key already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_api_key(
    State(state): State<AppState>,
    session: Session,
    Json(api_key): Json<AddApiKeyDto>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let api_key = ApiKeyService::new(&state.db)
        .add_api_key(current.id(), api_key)
        .await?;

    Ok((StatusCode::CREATED, Json(api_key)).into_response())
}

/// Remove one of the user's API key pairs
#[utoipa::path(
    delete,
    path = "/api/user/api_keys/{api_id}",
    tag = USER_TAG,
    params(("api_id" = i64, Path, description = "EVE API key ID")),
    responses(
        (status = 204, description = "API key pair removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "API key not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_api_key(
    State(state): State<AppState>,
    session: Session,
    Path(api_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    ApiKeyService::new(&state.db)
        .remove_api_key(current.id(), api_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
