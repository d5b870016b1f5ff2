//! Placeholder configuration values for the test ESI client. None of these are real
//! credentials.

pub static TEST_USER_AGENT: &str = "Recruit/0.1 (contact@example.com)";

pub static TEST_ESI_CLIENT_ID: &str = "esi_client_id";

pub static TEST_ESI_CLIENT_SECRET: &str = "esi_client_secret";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Path prefix of the mock GSF blacklist service, the character ID is appended.
pub static TEST_GSF_PATH: &str = "/gsf/";

/// Owner hash given to characters created by the fixtures.
pub static TEST_OWNER_HASH: &str = "owner_hash";
