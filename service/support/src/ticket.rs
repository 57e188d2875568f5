use std::sync::Arc;

use async_trait::async_trait;
use domain_support::{
    command::NewTicket,
    exception::{SupportException, SupportResult},
    model::entity::{Ticket, TicketHistoryEntry},
    repository::{TicketHistoryRepo, TicketRepo},
    service::TicketService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct TicketServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    history_repo: Arc<dyn TicketHistoryRepo>,
}

#[async_trait]
impl TicketService for TicketServiceImpl {
    async fn create(&self, ticket: NewTicket) -> SupportResult<Ticket> {
        let ticket = self.ticket_repo.insert(&ticket).await?;
        self.ticket_repo.save_changed().await?;
        Ok(ticket)
    }

    async fn get(&self, id: i64) -> SupportResult<Ticket> {
        self.ticket_repo.find_by_id(id).await?.ok_or(SupportException::TicketNotFound {
            ticket_id: id.to_string(),
        })
    }

    async fn list(&self) -> SupportResult<Vec<Ticket>> {
        Ok(self.ticket_repo.get_all().await?)
    }

    async fn history(&self, id: i64) -> SupportResult<Vec<TicketHistoryEntry>> {
        // Surface a 404 rather than an empty log for unknown tickets.
        self.get(id).await?;
        Ok(self.history_repo.find_by_ticket(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_support::mock::{MockTicketHistoryRepo, MockTicketRepo};

    #[tokio::test]
    async fn history_of_unknown_ticket_is_not_found() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo.expect_find_by_id().return_once(|_| Ok(None));
        let mut history_repo = MockTicketHistoryRepo::new();
        history_repo.expect_find_by_ticket().never();

        let service = TicketServiceImpl::builder()
            .ticket_repo(Arc::new(ticket_repo))
            .history_repo(Arc::new(history_repo))
            .build();

        assert!(matches!(
            service.history(5).await,
            Err(SupportException::TicketNotFound { .. })
        ));
    }
}
