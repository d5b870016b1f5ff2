//! Error types for the Recruit server application.
//!
//! Each domain (authentication, configuration, recruitment workflow, blacklist) has its own
//! error enum mapped to an HTTP response. The root [`Error`] aggregates them together with
//! the external library errors so services and controllers can use `?` throughout.

pub mod auth;
pub mod blacklist;
pub mod config;
pub mod recruit;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, blacklist::BlacklistError, config::ConfigError, recruit::RecruitError,
    },
};

/// Main error type for the Recruit server application.
///
/// Aggregates the domain errors and the external library errors. `#[from]` conversions allow
/// `?` from any of them; the `IntoResponse` implementation maps domain errors to their own
/// status codes and everything else to a logged 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error (session, CSRF, roles).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Recruitment workflow error (applications, comments, characters, roles).
    #[error(transparent)]
    RecruitError(#[from] RecruitError),
    /// Blacklist error (entries, GSF lookups).
    #[error(transparent)]
    BlacklistError(#[from] BlacklistError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Recruit's code.
    #[error("Internal error with Recruit's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// ESI client error (OAuth2 token exchange and validation).
    #[error(transparent)]
    EsiError(#[from] eve_esi::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error from an outbound request (GSF lookups).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// IO error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid input (CSRF mismatch, empty comment, unknown action)
/// - 401 Unauthorized - No user in session
/// - 403 Forbidden - Role does not permit the action
/// - 404 Not Found - Missing application, comment, user or blacklist entry
/// - 409 Conflict - Main character required, duplicate records
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RecruitError(err) => err.into_response(),
            Self::BlacklistError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
impl From<Error> for recruit_test_utils::TestError {
    fn from(err: Error) -> Self {
        recruit_test_utils::TestError::Other(Box::new(err))
    }
}
