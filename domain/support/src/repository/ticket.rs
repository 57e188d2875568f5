use async_trait::async_trait;

use crate::command::NewTicket;
use crate::model::entity::Ticket;

/// Mutations are staged on the request-scoped transaction and only become
/// durable when `save_changed` commits.
#[async_trait]
pub trait TicketRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Ticket>>;
    async fn get_all(&self) -> anyhow::Result<Vec<Ticket>>;
    async fn insert(&self, ticket: &NewTicket) -> anyhow::Result<Ticket>;
    async fn update(&self, ticket: &Ticket) -> anyhow::Result<()>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
