use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

fn reqwest_strategy(reqwest_error: &reqwest::Error) -> ErrorRetryStrategy {
    match reqwest_error.status() {
        // Remote service temporarily unavailable
        Some(status) if status.is_server_error() => ErrorRetryStrategy::Retry,
        // Invalid request or unexpected response, retrying won't help
        Some(_) => ErrorRetryStrategy::Fail,
        // Response body could not be decoded
        None if reqwest_error.is_decode() => ErrorRetryStrategy::Fail,
        // Network error or connection issue
        None => ErrorRetryStrategy::Retry,
    }
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::EsiError(eve_esi::Error::ReqwestError(reqwest_error)) => {
                reqwest_strategy(reqwest_error)
            }
            Self::ReqwestError(reqwest_error) => reqwest_strategy(reqwest_error),

            Self::DbErr(db_err) => match db_err {
                // Connection acquisition and connection errors are transient
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Query, type conversion, and record errors won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            Self::EsiError(_) => ErrorRetryStrategy::Fail,
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::RecruitError(_) => ErrorRetryStrategy::Fail,
            Self::BlacklistError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
