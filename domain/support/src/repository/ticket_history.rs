use async_trait::async_trait;

use crate::model::entity::{NewHistoryEntry, TicketHistoryEntry};

/// Append-only; entries are never updated or deleted.
#[async_trait]
pub trait TicketHistoryRepo: Send + Sync {
    async fn append(&self, entry: &NewHistoryEntry) -> anyhow::Result<()>;
    async fn find_by_ticket(&self, ticket_id: i64) -> anyhow::Result<Vec<TicketHistoryEntry>>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
