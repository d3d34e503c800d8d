use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Where the tracker takes an issue's percentage-complete from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueDoneRatio {
    /// Stored on the issue itself; plugins may write it
    #[default]
    IssueField,
    /// Derived from the issue's status
    IssueStatus,
}

impl IssueDoneRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IssueField => "issue_field",
            Self::IssueStatus => "issue_status",
        }
    }
}

impl FromStr for IssueDoneRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "issue_field" => Ok(Self::IssueField),
            "issue_status" => Ok(Self::IssueStatus),
            other => Err(format!("unknown issue_done_ratio mode: {other}")),
        }
    }
}

impl fmt::Display for IssueDoneRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracker-wide settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub issue_done_ratio: IssueDoneRatio,
}
