//! Test fixtures for database records and HTTP mocks.
//!
//! - `auth` - JWT keys, tokens and the EVE SSO OAuth2 endpoints
//! - `user` - users, main characters, roles and login metadata
//! - `eve` - characters, ownership history, corporations and API keys
//! - `recruit` - applications, linked characters and comments
//! - `blacklist` - internal blacklist entries and cached GSF statuses

pub mod auth;
pub mod blacklist;
pub mod eve;
pub mod recruit;
pub mod user;
