use async_trait::async_trait;

use crate::command::NewTicket;
use crate::exception::SupportResult;
use crate::model::entity::{Ticket, TicketHistoryEntry};

#[async_trait]
pub trait TicketService: Send + Sync {
    async fn create(&self, ticket: NewTicket) -> SupportResult<Ticket>;
    async fn get(&self, id: i64) -> SupportResult<Ticket>;
    async fn list(&self) -> SupportResult<Vec<Ticket>>;
    async fn history(&self, id: i64) -> SupportResult<Vec<TicketHistoryEntry>>;
}
