//! Authentication service layer.
//!
//! Handles the EVE Online SSO flow: building the login URL and turning a validated callback
//! into a logged-in Recruit user, creating users and moving character ownership as needed.

pub mod callback;
pub mod login;
