//! Service layer for business logic.
//!
//! Services implement Recruit's rules on top of the repositories: SSO login and character
//! ownership, the application workflow and its role checks, blacklist checks including the
//! external GSF lookup, and administration. Transient database failures while loading the
//! session user are retried through [`retry::RetryContext`].

pub mod admin;
pub mod auth;
pub mod blacklist;
pub mod recruit;
pub mod retry;
pub mod user;
