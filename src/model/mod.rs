//! API data transfer objects shared by the HTTP controllers and their consumers.

pub mod admin;
pub mod api;
pub mod blacklist;
pub mod recruit;
pub mod user;
