//! Declarative test builder.
//!
//! Configuration methods are chained on `TestBuilder` and queued; everything runs during the
//! final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, ActiveValue, EntityTrait, Schema};

use crate::{constant::TEST_GSF_PATH, error::TestError, TestContext};

/// Role names seeded by [`TestBuilder::with_recruit_tables`], in ID order.
pub const SEEDED_ROLES: [&str; 4] = ["admin", "recruiter", "reviewer", "training"];

/// Builder for declarative test initialization.
///
/// Sets up database tables and mock HTTP endpoints, finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_recruit_tables: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    gsf_endpoints: Vec<(i64, String, usize)>, // (character_id, status, expected_requests)
    jwt_configs: Vec<(i64, String)>,          // (character_id, owner_hash)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_recruit_tables: false,
            mock_builders: Vec::new(),
            gsf_endpoints: Vec::new(),
            jwt_configs: Vec::new(),
        }
    }

    /// Create every Recruit table and seed the known roles.
    ///
    /// Roles `admin`, `recruiter`, `reviewer` and `training` receive IDs 1 to 4.
    pub fn with_recruit_tables(mut self) -> Self {
        self.include_recruit_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use recruit_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), recruit_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Role)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add a mock GSF blacklist lookup for a character.
    ///
    /// Answers `POST /gsf/{character_id}` with `[{"output": status}]`, expected to be called
    /// exactly `expected_requests` times.
    pub fn with_gsf_endpoint(
        mut self,
        character_id: i64,
        status: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.gsf_endpoints
            .push((character_id, status.into(), expected_requests));
        self
    }

    /// Add JWT authentication endpoints to the test server.
    ///
    /// Creates `/oauth/jwks` (JWT keys) and `/v2/oauth/token` (token exchange) for an EVE SSO
    /// login of the given character.
    pub fn with_jwt_endpoints(mut self, character_id: i64, owner_hash: impl Into<String>) -> Self {
        self.jwt_configs.push((character_id, owner_hash.into()));
        self
    }

    /// Add a mock endpoint answering with a fixed status and body.
    pub fn with_mock_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Self {
        let method = method.to_string();
        let path = path.to_string();
        let body = body.to_string();

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock(method.as_str(), path.as_str())
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create()
        }));
        self
    }

    /// Build the test context.
    ///
    /// Executes queued operations in order:
    /// 1. Creates database tables, then seeds roles when recruit tables were requested
    /// 2. Creates mock HTTP endpoints (custom endpoints first, then GSF and JWT)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or seeding failed
    /// - `Err(TestError::EsiError)` - Mock ESI client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_recruit_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EveAlliance),
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::RecruitUser),
                schema.create_table_from_entity(entity::prelude::EveApiKeyPair),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::EveCharacterPreviousUser),
                schema.create_table_from_entity(entity::prelude::Role),
                schema.create_table_from_entity(entity::prelude::RecruitUserRole),
                schema.create_table_from_entity(entity::prelude::HrApplication),
                schema.create_table_from_entity(entity::prelude::HrApplicationCharacter),
                schema.create_table_from_entity(entity::prelude::HrApplicationComment),
                schema.create_table_from_entity(entity::prelude::BlacklistCharacter),
                schema.create_table_from_entity(entity::prelude::BlacklistGsf),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        if self.include_recruit_tables {
            let roles = SEEDED_ROLES.map(|name| entity::role::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                ..Default::default()
            });

            entity::prelude::Role::insert_many(roles)
                .exec(&context.db)
                .await?;
        }

        // 2. Create mock endpoints
        // Custom endpoints are created first so tests can queue an error response ahead of
        // a helper's success response on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (character_id, status, expected) in self.gsf_endpoints {
            let body = serde_json::json!([{ "output": status }]).to_string();

            mocks.push(
                context
                    .server
                    .mock("POST", format!("{}{}", TEST_GSF_PATH, character_id).as_str())
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(body)
                    .expect(expected)
                    .create(),
            );
        }

        for (character_id, owner_hash) in self.jwt_configs {
            mocks.extend(context.auth().create_jwt_endpoints(character_id, &owner_hash));
        }

        // Keep mocks alive for as long as the test runs
        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
