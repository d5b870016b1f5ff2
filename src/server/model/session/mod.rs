//! Session data models.
//!
//! Typed wrappers over tower-sessions keys: the logged in user ID and the CSRF state of
//! an in-flight SSO login.

pub mod auth;
pub mod user;
