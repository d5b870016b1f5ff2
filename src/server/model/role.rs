//! Role names known to the authorization checks.

use std::{fmt, str::FromStr};

use crate::server::error::Error;

/// Roles granting access to staff features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleName {
    /// Full access, including hiding and deleting applications.
    Admin,
    /// Can make final decisions on applications.
    Recruiter,
    /// Can comment and mark applications pending.
    Reviewer,
    /// Sees applications flagged for training first in the queue.
    Training,
}

impl RoleName {
    /// Every known role, in seeding order.
    pub const ALL: [RoleName; 4] = [
        RoleName::Admin,
        RoleName::Recruiter,
        RoleName::Reviewer,
        RoleName::Training,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Recruiter => "recruiter",
            Self::Reviewer => "reviewer",
            Self::Training => "training",
        }
    }

    /// Whether the role makes its holder staff.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::Recruiter | Self::Reviewer)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "recruiter" => Ok(Self::Recruiter),
            "reviewer" => Ok(Self::Reviewer),
            "training" => Ok(Self::Training),
            other => Err(Error::ParseError(format!("unknown role {:?}", other))),
        }
    }
}
