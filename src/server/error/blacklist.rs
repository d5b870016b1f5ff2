use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist entry ID {0} not found")]
    EntryNotFound(i32),
    #[error("Blacklist entries require a character name")]
    MissingName,
    #[error("GSF blacklist returned an unexpected response: {0}")]
    UnexpectedGsfResponse(String),
}

impl IntoResponse for BlacklistError {
    fn into_response(self) -> Response {
        match self {
            Self::EntryNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::MissingName => error_response(StatusCode::BAD_REQUEST, self.to_string()),
            Self::UnexpectedGsfResponse(_) => InternalServerError(self).into_response(),
        }
    }
}
