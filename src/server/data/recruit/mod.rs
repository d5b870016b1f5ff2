//! Recruitment application and comment repositories.

pub mod application;
pub mod comment;
