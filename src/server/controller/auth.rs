use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, user::SessionUserId},
        },
        service::auth::{callback::CallbackService, login::login_service},
        util::ip::client_ip,
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with EVE Online
///
/// Creates a URL to login with EVE Online and redirects the user to that URL to begin the login process.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to a temporary login URL to start the EVE Online login process
/// - 500 (Internal Server Error): An error if the ESI client is not properly configured for OAuth2
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to EVE Online login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let scopes = eve_esi::ScopeBuilder::new().build();

    let login = login_service(&state.esi_client, scopes)?;

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route user is redirected to after successful login at EVE Online's website
///
/// Validates the CSRF state, exchanges the code for the character's token and logs the user
/// in, creating a user or linking the character to the user already logged in. The client IP
/// is taken from `X-Forwarded-For` when the server sits behind a proxy.
///
/// # Responses
/// - 307 (Temporary Redirect): Successful login, redirect to the current user route
/// - 400 (Bad Request): CSRF state mismatch with the state stored in session
/// - 500 (Internal Server Error): Token validation, ESI request or database error
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Login successful, redirect to current user"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let callback_service = CallbackService::new(&state.db, &state.esi_client);

    validate_csrf(&session, &params.state).await?;

    let maybe_user_id = SessionUserId::get(&session).await?;
    let ip_address = client_ip(&headers, Some(peer));

    let user_id = callback_service
        .handle_callback(&params.code, maybe_user_id, &ip_address)
        .await?;

    if maybe_user_id != Some(user_id) {
        SessionUserId::insert(&session, user_id).await?;
    }

    Ok(Redirect::temporary("/api/auth/user"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to login route
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session without data errors, so only clear when a user is present
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/api/auth/login"))
}

/// Get the logged in user with main character and roles
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let current = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, axum::Json(UserDto::from(current))).into_response())
}
