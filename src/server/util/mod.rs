//! Utility functions for server operations.
//!
//! Client IP resolution for login tracking and blacklist checks, and the GSF lookup cache
//! expiry calculation.

pub mod ip;
pub mod time;
