use crate::{CoreError, Permission, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Project membership role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Developer,
    /// May tick items off but not edit them
    Reporter,
    Viewer,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Developer => "developer",
            Self::Reporter => "reporter",
            Self::Viewer => "viewer",
        }
    }

    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::Manager | Self::Developer => &[
                Permission::ViewChecklists,
                Permission::EditChecklists,
                Permission::DoneChecklists,
            ],
            Self::Reporter => &[Permission::ViewChecklists, Permission::DoneChecklists],
            Self::Viewer => &[Permission::ViewChecklists],
        }
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "manager" => Ok(Self::Manager),
            "developer" => Ok(Self::Developer),
            "reporter" => Ok(Self::Reporter),
            "viewer" => Ok(Self::Viewer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
