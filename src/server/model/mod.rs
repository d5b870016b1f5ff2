//! Server application models and type definitions.
//!
//! Application state, database model aliases, role and workflow enums, the authenticated
//! user context, and typed session wrappers.

pub mod app;
pub mod application;
pub mod db;
pub mod role;
pub mod session;
pub mod user;
