use async_trait::async_trait;

use crate::command::FeedbackSubmission;
use crate::exception::SupportResult;
use crate::model::entity::Feedback;

/// Records ticket feedback and synchronizes the ticket status as one
/// atomic unit.
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Durably records the feedback; when the ticket is not yet
    /// completed, also flips it to `Completed` and appends one history
    /// entry. All writes commit together or not at all.
    async fn submit(&self, submission: FeedbackSubmission) -> SupportResult<Feedback>;

    /// Whether at least one feedback row exists for the ticket.
    /// Non-transactional read, no side effects.
    async fn exists_for_ticket(&self, ticket_id: &str) -> SupportResult<bool>;

    /// All feedback rows for the ticket, no side effects.
    async fn find_by_ticket(&self, ticket_id: &str) -> SupportResult<Vec<Feedback>>;
}
