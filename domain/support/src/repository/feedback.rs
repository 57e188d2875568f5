use async_trait::async_trait;

use crate::command::NewFeedback;
use crate::model::entity::Feedback;

#[async_trait]
pub trait FeedbackRepo: Send + Sync {
    /// Stages the insert and returns the row as it will be persisted,
    /// including the store-assigned id.
    async fn insert(&self, feedback: &NewFeedback) -> anyhow::Result<Feedback>;
    /// All feedback for a ticket, unfiltered, in store-native order.
    async fn find_by_ticket(&self, ticket_id: &str) -> anyhow::Result<Vec<Feedback>>;
    async fn exists_for_ticket(&self, ticket_id: &str) -> anyhow::Result<bool>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
