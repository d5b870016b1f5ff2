//! EVE Online data repositories.
//!
//! Characters (with ownership history), corporations, alliances and legacy API key pairs.

pub mod alliance;
pub mod api_key;
pub mod character;
pub mod corporation;
