//! Test utilities for the Recruit workspace.
//!
//! [`TestBuilder`] declares what a test needs (tables, mock HTTP endpoints) and builds a
//! [`TestContext`] with an in-memory SQLite database, a mockito server standing in for EVE
//! SSO and the GSF blacklist service, and an in-memory session. Fixtures for inserting
//! records are reached through the context (`test.user()`, `test.eve()`, `test.recruit()`,
//! `test.blacklist()`).

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
