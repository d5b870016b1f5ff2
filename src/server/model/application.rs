//! Application workflow vocabulary: statuses, actions and queue filters.

use std::{fmt, str::FromStr};

use crate::server::{
    error::{recruit::RecruitError, Error},
    model::role::RoleName,
};

/// Status stored in `hr_application.status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    New,
    Pending,
    Approved,
    Rejected,
    Closed,
    Training,
}

impl ApplicationStatus {
    /// Statuses excluded from the "current" queue filter.
    pub const FINISHED: [ApplicationStatus; 3] = [
        ApplicationStatus::Closed,
        ApplicationStatus::Rejected,
        ApplicationStatus::Approved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Closed => "Closed",
            Self::Training => "Training",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            "Closed" => Ok(Self::Closed),
            "Training" => Ok(Self::Training),
            other => Err(Error::ParseError(format!(
                "unknown application status {:?}",
                other
            ))),
        }
    }
}

/// Action requested on an application through the interact endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationAction {
    Pending,
    Approve,
    Reject,
    Close,
    Training,
    Hide,
    Unhide,
    Delete,
}

impl ApplicationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Close => "close",
            Self::Training => "training",
            Self::Hide => "hide",
            Self::Unhide => "unhide",
            Self::Delete => "delete",
        }
    }

    /// The status an action moves the application to, `None` for visibility and delete.
    pub fn target_status(&self) -> Option<ApplicationStatus> {
        match self {
            Self::Pending => Some(ApplicationStatus::Pending),
            Self::Approve => Some(ApplicationStatus::Approved),
            Self::Reject => Some(ApplicationStatus::Rejected),
            Self::Close => Some(ApplicationStatus::Closed),
            Self::Training => Some(ApplicationStatus::Training),
            Self::Hide | Self::Unhide | Self::Delete => None,
        }
    }

    /// Staff roles allowed to perform the action.
    pub fn permitted_roles(&self) -> &'static [RoleName] {
        match self {
            Self::Pending => &[RoleName::Admin, RoleName::Recruiter, RoleName::Reviewer],
            Self::Approve | Self::Reject | Self::Close | Self::Training => {
                &[RoleName::Admin, RoleName::Recruiter]
            }
            Self::Hide | Self::Unhide | Self::Delete => &[RoleName::Admin],
        }
    }
}

impl fmt::Display for ApplicationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "close" => Ok(Self::Close),
            "training" => Ok(Self::Training),
            "hide" => Ok(Self::Hide),
            "unhide" => Ok(Self::Unhide),
            "delete" => Ok(Self::Delete),
            other => Err(RecruitError::UnknownAction(other.to_string()).into()),
        }
    }
}

/// Which applications the staff queue lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QueueFilter {
    /// Visible applications that are not approved, rejected or closed.
    #[default]
    Current,
    /// Every visible application.
    All,
    /// Visible applications the caller reviewed, acted on last or commented on.
    Mine,
}

impl TryFrom<i32> for QueueFilter {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Current),
            1 => Ok(Self::All),
            2 => Ok(Self::Mine),
            other => Err(RecruitError::UnknownQueueFilter(other).into()),
        }
    }
}
