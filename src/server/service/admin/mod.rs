//! Administration service layer.
//!
//! Role assignment and the alliance and corporation records used to label characters.

pub mod eve;
pub mod role;
