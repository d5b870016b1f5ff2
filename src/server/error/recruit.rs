use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RecruitError {
    #[error("Application ID {0} not found")]
    ApplicationNotFound(i32),
    #[error("Comment ID {comment_id} not found on application ID {application_id}")]
    CommentNotFound { application_id: i32, comment_id: i32 },
    #[error("Comment text must not be empty")]
    EmptyComment,
    #[error("An application requires at least one character")]
    NoCharactersSelected,
    #[error("Character ID {0} is not owned by the current user")]
    CharacterNotOwned(i64),
    #[error("Unknown application action {0:?}")]
    UnknownAction(String),
    #[error("Unknown queue filter {0}")]
    UnknownQueueFilter(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("Role {0:?} not found")]
    RoleNotFound(String),
    #[error("API key ID {0} not found")]
    ApiKeyNotFound(i64),
    #[error("API key ID {0} is already registered")]
    ApiKeyAlreadyExists(i64),
    #[error("Alliance ID {0} is not recorded")]
    AllianceNotFound(i64),
}

impl IntoResponse for RecruitError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::ApplicationNotFound(_)
            | Self::CommentNotFound { .. }
            | Self::UserNotFound(_)
            | Self::RoleNotFound(_)
            | Self::ApiKeyNotFound(_)
            | Self::AllianceNotFound(_) => StatusCode::NOT_FOUND,
            Self::ApiKeyAlreadyExists(_) => StatusCode::CONFLICT,
            Self::EmptyComment
            | Self::NoCharactersSelected
            | Self::CharacterNotOwned(_)
            | Self::UnknownAction(_)
            | Self::UnknownQueueFilter(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
