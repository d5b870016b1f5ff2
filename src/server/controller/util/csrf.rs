use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Validate that the session CSRF state exists and matches `state`.
///
/// The stored state is removed so a login URL can only complete once.
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    if stored_state != csrf_state {
        return Err(Error::AuthError(AuthError::CsrfValidationFailed));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use recruit_test_utils::prelude::*;

    use crate::server::{
        controller::util::csrf::validate_csrf, model::session::auth::SessionAuthCsrf,
    };

    /// Expect matching state to validate and be consumed
    #[tokio::test]
    async fn validates_csrf_successfully() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        SessionAuthCsrf::insert(&test.session, "state").await?;
        let result = validate_csrf(&test.session, "state").await;

        assert!(result.is_ok());
        assert!(SessionAuthCsrf::get(&test.session).await.is_err());

        Ok(())
    }

    /// Expect 400 bad request when the state doesn't match
    #[tokio::test]
    async fn fails_for_csrf_mismatch() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        SessionAuthCsrf::insert(&test.session, "different_state").await?;
        let result = validate_csrf(&test.session, "state").await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 500 internal server error when no state was stored
    #[tokio::test]
    async fn fails_when_csrf_not_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = validate_csrf(&test.session, "state").await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
