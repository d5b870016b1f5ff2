//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` holds an in-memory SQLite database, a mock
//! HTTP server, an ESI client pointed at that server, and a session backed by an in-memory
//! store.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{
        TEST_CALLBACK_URL, TEST_ESI_CLIENT_ID, TEST_ESI_CLIENT_SECRET, TEST_GSF_PATH,
        TEST_USER_AGENT,
    },
    error::TestError,
};

/// Test environment returned by [`TestBuilder::build`](crate::TestBuilder::build)
///
/// ```ignore
/// let test = TestBuilder::new().with_recruit_tables().build().await?;
///
/// let (user, main) = test.user().insert_user_with_main(1, "Pilot").await?;
/// let state: AppState = test.to_app_state();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// ESI client configured to use mock server
    pub esi_client: eve_esi::Client,
    /// Session for authentication flows
    pub session: Session,

    /// Mock HTTP server for EVE SSO and the GSF blacklist service
    pub(crate) server: ServerGuard,
    /// Mock endpoints kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert database and ESI client into any type that can be constructed from them
    ///
    /// This allows conversion to `AppState` without a dependency on the recruit crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, eve_esi::Client)>,
    {
        T::from((self.db.clone(), self.esi_client.clone()))
    }

    /// Base URL of the mock GSF blacklist service
    pub fn gsf_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_GSF_PATH)
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let esi_config = eve_esi::Config::builder()
            .esi_url(&mock_server_url)
            .token_url(&format!("{}/v2/oauth/token", mock_server_url))
            .jwk_url(&format!("{}/oauth/jwks", mock_server_url))
            .build()?;

        let esi_client = eve_esi::Client::builder()
            .config(esi_config)
            .user_agent(TEST_USER_AGENT)
            .client_id(TEST_ESI_CLIENT_ID)
            .client_secret(TEST_ESI_CLIENT_SECRET)
            .callback_url(TEST_CALLBACK_URL)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            esi_client,
            session,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
