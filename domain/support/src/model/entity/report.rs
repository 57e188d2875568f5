use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Non-conformity report raised against a process or a delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonConformityReport {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub department_id: Option<i64>,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    pub reporter: Option<String>,
    /// OneDrive folder provisioned for the report's attachments, when
    /// drive integration is enabled.
    pub drive_folder: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(
    FromPrimitive, ToPrimitive, Copy, Clone, Serialize, Deserialize, Default, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportSeverity {
    #[default]
    Minor,
    Major,
    Critical,
}

impl ReportSeverity {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MINOR" => Some(Self::Minor),
            "MAJOR" => Some(Self::Major),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }
}

#[derive(
    FromPrimitive, ToPrimitive, Copy, Clone, Serialize, Deserialize, Default, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    #[default]
    Open,
    Closed,
}
