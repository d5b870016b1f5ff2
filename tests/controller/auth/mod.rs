//! Tests for the EVE Online SSO login, callback, logout and current user endpoints.

mod callback;
mod login;
mod logout;
mod user;

use super::*;
