//! Server application core modules.
//!
//! This module contains the HTTP backend of Recruit: EVE Online SSO login, recruitment
//! applications with their review workflow, reviewer comments, blacklist checks against
//! the internal list and the GSF lookup service, and the administrative endpoints for
//! roles and alliance/corporation records.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
