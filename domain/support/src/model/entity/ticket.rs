use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Support ticket whose status the feedback workflow can transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    /// Identifier of the user who opened the ticket.
    pub requester: Option<String>,
    /// Identifier of the agent handling the ticket.
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    FromPrimitive, ToPrimitive, Copy, Clone, Serialize, Deserialize, Default, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    OnHold,
    /// Terminal for the feedback workflow: once reached, feedback
    /// submissions no longer touch the ticket.
    Completed,
    Cancelled,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::OnHold => "ON_HOLD",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{FromPrimitive, ToPrimitive};

    #[test]
    fn status_round_trips_through_i32() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::OnHold,
            TicketStatus::Completed,
            TicketStatus::Cancelled,
        ] {
            let raw = status.to_i32().unwrap();
            assert_eq!(TicketStatus::from_i32(raw), Some(status));
        }
        assert_eq!(TicketStatus::from_i32(99), None);
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, r#""IN_PROGRESS""#);
        assert_eq!(TicketStatus::Completed.as_str(), "COMPLETED");
    }
}
