use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rating submitted by a user after ticket resolution.
///
/// Created once by the submission workflow, never updated or deleted.
/// Duplicate rows per ticket are possible; the store does not enforce
/// uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Assigned by the store on insert.
    pub id: i64,
    /// Textual ticket identifier as submitted by the caller.
    pub ticket_id: String,
    /// 0..=3
    pub knowledge: i32,
    /// 0..=3
    pub timing: i32,
    /// 0..=3
    pub escalation: i32,
    /// 0 or 1
    pub resolved: i32,
    pub comment: Option<String>,
    /// Set at insert, immutable.
    pub created_at: DateTime<Utc>,
}
