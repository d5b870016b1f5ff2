use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    #[error("User ID {user_id} lacks the role required to {action}")]
    AccessDenied { user_id: i32, action: String },
    #[error("A main character must be selected before acting on applications")]
    MainCharacterRequired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to do that",
                )
            }
            Self::MainCharacterRequired => error_response(
                StatusCode::CONFLICT,
                "Please select a main character first",
            ),
            Self::CsrfMissingValue => InternalServerError(self).into_response(),
        }
    }
}

impl AuthError {
    pub fn denied(user_id: i32, action: impl Into<String>) -> Self {
        Self::AccessDenied {
            user_id,
            action: action.into(),
        }
    }
}
