//! Internal character blacklist and GSF lookup cache repositories.

pub mod character;
pub mod gsf;
