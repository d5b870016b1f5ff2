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
        recruit::{CommentDto, CommentTextDto},
    },
    server::{
        controller::{application::RECRUIT_TAG, util::get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::recruit::comment::CommentService,
    },
};

/// Comment on an application, staff only
#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/comments",
    tag = RECRUIT_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    request_body = CommentTextDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Empty comment", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
    Json(body): Json<CommentTextDto>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let comment = CommentService::new(&state.db)
        .create_comment(&current, application_id, body.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)).into_response())
}

/// Edit a comment, allowed for its author and admins
#[utoipa::path(
    put,
    path = "/api/applications/{application_id}/comments/{comment_id}",
    tag = RECRUIT_TAG,
    params(
        ("application_id" = i32, Path, description = "Application ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = CommentTextDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Empty comment", body = ErrorDto),
        (status = 403, description = "Not the author or an admin", body = ErrorDto),
        (status = 404, description = "Application or comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_comment(
    State(state): State<AppState>,
    session: Session,
    Path((application_id, comment_id)): Path<(i32, i32)>,
    Json(body): Json<CommentTextDto>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let comment = CommentService::new(&state.db)
        .edit_comment(&current, application_id, comment_id, body.comment)
        .await?;

    Ok((StatusCode::OK, Json(comment)).into_response())
}

/// Delete a comment, allowed for its author and admins
#[utoipa::path(
    delete,
    path = "/api/applications/{application_id}/comments/{comment_id}",
    tag = RECRUIT_TAG,
    params(
        ("application_id" = i32, Path, description = "Application ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 403, description = "Not the author or an admin", body = ErrorDto),
        (status = 404, description = "Application or comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path((application_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    CommentService::new(&state.db)
        .delete_comment(&current, application_id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
