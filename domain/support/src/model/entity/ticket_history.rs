use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TicketStatus;

/// Append-only audit record of a ticket field change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistoryEntry {
    pub id: i64,
    pub ticket_id: i64,
    /// Acting user, absent for system-triggered changes.
    pub user_id: Option<String>,
    pub action: HistoryAction,
    pub old_values: Map<String, Value>,
    pub new_values: Map<String, Value>,
    pub description: String,
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    FromPrimitive, ToPrimitive, Copy, Clone, Serialize, Deserialize, Default, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    #[default]
    Created,
    StatusChanged,
    Assigned,
    Commented,
}

/// History entry staged for insertion; id and timestamp are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub ticket_id: i64,
    pub user_id: Option<String>,
    pub action: HistoryAction,
    pub old_values: Map<String, Value>,
    pub new_values: Map<String, Value>,
    pub description: String,
    pub metadata: Map<String, Value>,
}

impl NewHistoryEntry {
    /// Entry recording a status transition. Metadata stays an empty map
    /// in this flow.
    pub fn status_changed(
        ticket_id: i64,
        user_id: Option<String>,
        old: TicketStatus,
        new: TicketStatus,
        description: impl Into<String>,
    ) -> Self {
        let mut old_values = Map::new();
        old_values.insert("status".into(), old.as_str().into());
        let mut new_values = Map::new();
        new_values.insert("status".into(), new.as_str().into());
        Self {
            ticket_id,
            user_id,
            action: HistoryAction::StatusChanged,
            old_values,
            new_values,
            description: description.into(),
            metadata: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_changed_snapshots_old_and_new_status() {
        let entry = NewHistoryEntry::status_changed(
            7,
            Some("u-1".into()),
            TicketStatus::Open,
            TicketStatus::Completed,
            "Ticket completed after feedback submission",
        );
        assert_eq!(entry.action, HistoryAction::StatusChanged);
        assert_eq!(entry.old_values["status"], "OPEN");
        assert_eq!(entry.new_values["status"], "COMPLETED");
        assert!(entry.metadata.is_empty());
    }
}
