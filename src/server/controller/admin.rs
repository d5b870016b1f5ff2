use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{AllianceDto, CorporationDto, RoleDto},
        api::ErrorDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::admin::{eve::EveEntityService, role::RoleService},
    },
};

pub static ADMIN_TAG: &str = "admin";

/// List every known role
#[utoipa::path(
    get,
    path = "/api/admin/roles",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Known roles", body = Vec<RoleDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let roles = RoleService::new(&state.db).list_roles(&current).await?;

    Ok((StatusCode::OK, Json(roles)).into_response())
}

/// Grant a role to a user
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/roles/{role}",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("role" = String, Path, description = "Role name")
    ),
    responses(
        (status = 200, description = "The user's roles afterwards", body = Vec<RoleDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_role(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, role)): Path<(i32, String)>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let roles = RoleService::new(&state.db)
        .assign_role(&current, user_id, &role)
        .await?;

    Ok((StatusCode::OK, Json(roles)).into_response())
}

/// Revoke a role from a user
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}/roles/{role}",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("role" = String, Path, description = "Role name")
    ),
    responses(
        (status = 200, description = "The user's roles afterwards", body = Vec<RoleDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_role(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, role)): Path<(i32, String)>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let roles = RoleService::new(&state.db)
        .remove_role(&current, user_id, &role)
        .await?;

    Ok((StatusCode::OK, Json(roles)).into_response())
}

/// Create or update an alliance record
#[utoipa::path(
    put,
    path = "/api/admin/alliances",
    tag = ADMIN_TAG,
    request_body = AllianceDto,
    responses(
        (status = 200, description = "Alliance stored", body = AllianceDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_alliance(
    State(state): State<AppState>,
    session: Session,
    Json(alliance): Json<AllianceDto>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let alliance = EveEntityService::new(&state.db)
        .upsert_alliance(&current, alliance)
        .await?;

    Ok((StatusCode::OK, Json(alliance)).into_response())
}

/// Create or update a corporation record
#[utoipa::path(
    put,
    path = "/api/admin/corporations",
    tag = ADMIN_TAG,
    request_body = CorporationDto,
    responses(
        (status = 200, description = "Corporation stored", body = CorporationDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Alliance not recorded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_corporation(
    State(state): State<AppState>,
    session: Session,
    Json(corporation): Json<CorporationDto>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let corporation = EveEntityService::new(&state.db)
        .upsert_corporation(&current, corporation)
        .await?;

    Ok((StatusCode::OK, Json(corporation)).into_response())
}
