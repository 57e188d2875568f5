use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound email recorded before dispatch; the row keeps the delivery
/// outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    /// Name of the registered handlebars template.
    pub template: String,
    /// Data the template was rendered with.
    pub context: Value,
    pub status: DeliveryStatus,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(
    FromPrimitive, ToPrimitive, Copy, Clone, Serialize, Deserialize, Default, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Sent,
    Failed,
}
