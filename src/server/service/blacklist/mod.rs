//! Blacklist service layer.
//!
//! Cross-references applicants against the internal blacklist (names and IPs) and the
//! external GSF blacklist, and manages internal blacklist entries.

pub mod check;
pub mod entry;
pub mod gsf;
