use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user shortcut to an internal or external resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub user_id: String,
    pub label: String,
    pub url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
