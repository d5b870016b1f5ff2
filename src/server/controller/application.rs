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
        recruit::{
            ApplicationActionDto, ApplicationDto, ApplicationPageDto, ApplicationViewDto,
            CreateApplicationDto, QueueParams,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, application::ApplicationAction},
        service::recruit::{application::ApplicationService, queue::QueueService},
    },
};

pub static RECRUIT_TAG: &str = "recruit";

/// List the logged in user's own applications, newest first
#[utoipa::path(
    get,
    path = "/api/applications/mine",
    tag = RECRUIT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "One page of the user's applications", body = ApplicationPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_applications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let page = ApplicationService::new(&state.db, state.gsf_client.as_ref())
        .get_my_applications(
            current.id(),
            params.page.unwrap_or(1),
            state.max_number_per_page,
        )
        .await?;

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Staff application queue
///
/// `filter` selects current (0, default), all (1) or the caller's own (2) applications. A
/// non-empty `search` replaces the filter and always returns the first page.
#[utoipa::path(
    get,
    path = "/api/applications/queue",
    tag = RECRUIT_TAG,
    params(QueueParams),
    responses(
        (status = 200, description = "One page of the queue", body = ApplicationPageDto),
        (status = 400, description = "Unknown filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn application_queue(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<QueueParams>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let page = QueueService::new(&state.db)
        .get_queue(&current, params, state.max_number_per_page)
        .await?;

    Ok((StatusCode::OK, Json(page)).into_response())
}

/// Submit a new application for the logged in user
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = RECRUIT_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application created", body = ApplicationDto),
        (status = 400, description = "No characters, or a character not owned by the user", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Main character required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    session: Session,
    Json(application): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let application = ApplicationService::new(&state.db, state.gsf_client.as_ref())
        .create_application(&current, application)
        .await?;

    Ok((StatusCode::CREATED, Json(application)).into_response())
}

/// View an application
///
/// Staff receive the review view with characters, related applications, comments, GSF
/// statuses and blacklist notices. The applicant receives the application alone.
#[utoipa::path(
    get,
    path = "/api/applications/{application_id}",
    tag = RECRUIT_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "The application", body = ApplicationViewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn view_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    let view = ApplicationService::new(&state.db, state.gsf_client.as_ref())
        .view_application(&current, application_id)
        .await?;

    Ok((StatusCode::OK, Json(view)).into_response())
}

/// Apply a workflow action to an application
///
/// Actions: `pending`, `approve`, `reject`, `close`, `training`, `hide`, `unhide`, `delete`.
#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/{action}",
    tag = RECRUIT_TAG,
    params(
        ("application_id" = i32, Path, description = "Application ID"),
        ("action" = String, Path, description = "Workflow action")
    ),
    responses(
        (status = 200, description = "Action applied", body = ApplicationActionDto),
        (status = 400, description = "Unknown action", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Action not permitted", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Main character required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn interact(
    State(state): State<AppState>,
    session: Session,
    Path((application_id, action)): Path<(i32, String)>,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;
    let action: ApplicationAction = action.parse()?;

    let result = ApplicationService::new(&state.db, state.gsf_client.as_ref())
        .interact(&current, application_id, action)
        .await?;

    Ok((StatusCode::OK, Json(result)).into_response())
}
