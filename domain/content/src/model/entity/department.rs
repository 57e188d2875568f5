use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organizational department; `parent_id` forms the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    /// Short internal code, unique by convention.
    pub code: String,
    pub parent_id: Option<i64>,
    pub manager_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
