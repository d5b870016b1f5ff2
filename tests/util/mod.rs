//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use recruit::server::{
    error::Error,
    model::{app::AppState, session::user::SessionUserId},
    service::blacklist::gsf::GsfClient,
};
use recruit_test_utils::{constant::TEST_USER_AGENT, TestContext, TestError};

/// Extension trait for building `AppState` from a `TestContext`
pub trait TestContextExt {
    fn app_state(&self) -> AppState;

    /// State whose GSF client points at the mock server
    fn app_state_with_gsf(&self) -> Result<AppState, TestError>;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn app_state_with_gsf(&self) -> Result<AppState, TestError> {
        let gsf_client = GsfClient::new(self.gsf_url(), TEST_USER_AGENT).map_err(app_err)?;

        Ok(self.app_state().with_gsf_client(gsf_client))
    }
}

/// Wraps an application error so it can be returned from a test
pub fn app_err(err: Error) -> TestError {
    TestError::Other(Box::new(err))
}

/// Stores `user_id` in the test session as the logged in user
pub async fn login(test: &TestContext, user_id: i32) -> Result<(), TestError> {
    SessionUserId::insert(&test.session, user_id)
        .await
        .map_err(app_err)
}

/// Reads a JSON response body
pub async fn body_json(resp: Response) -> Result<serde_json::Value, TestError> {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .map_err(|e| TestError::Other(Box::new(e)))?;

    serde_json::from_slice(&bytes).map_err(|e| TestError::Other(Box::new(e)))
}
