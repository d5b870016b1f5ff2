//! Utility functions for controller request handling.
//!
//! CSRF validation for the SSO login flow, and loading the current user (with a staff check)
//! for protected endpoints.

pub mod csrf;
pub mod get_user;
