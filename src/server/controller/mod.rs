//! HTTP controller endpoints for the Recruit web API.
//!
//! Axum handlers for EVE SSO login, the user's characters and API keys, applications and
//! their review workflow, reviewer comments, the internal blacklist, and admin management.
//! Handlers load the current user from the tower-sessions session, delegate to services and
//! carry utoipa annotations for the OpenAPI document.

pub mod admin;
pub mod application;
pub mod auth;
pub mod blacklist;
pub mod comment;
pub mod user;
pub mod util;
