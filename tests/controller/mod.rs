//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built from a `TestContext`, except for the
//! router tests which send requests through the assembled router.

mod admin;
mod application;
mod auth;
mod blacklist;
mod comment;
mod router;
mod user;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use recruit_test_utils::prelude::*;

use crate::util::{app_err, body_json, login, TestContextExt};
