use async_trait::async_trait;
use mockall::mock;

use crate::command::{NewFeedback, NewReport, NewTicket};
use crate::model::entity::{
    Feedback, NewHistoryEntry, NonConformityReport, Ticket, TicketHistoryEntry,
};
use crate::repository::{FeedbackRepo, ReportRepo, TicketHistoryRepo, TicketRepo};

mock! {
    pub TicketRepo {}
    #[async_trait]
    impl TicketRepo for TicketRepo {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Ticket>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Ticket>>;
        async fn insert(&self, ticket: &NewTicket) -> anyhow::Result<Ticket>;
        async fn update(&self, ticket: &Ticket) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub FeedbackRepo {}
    #[async_trait]
    impl FeedbackRepo for FeedbackRepo {
        async fn insert(&self, feedback: &NewFeedback) -> anyhow::Result<Feedback>;
        async fn find_by_ticket(&self, ticket_id: &str) -> anyhow::Result<Vec<Feedback>>;
        async fn exists_for_ticket(&self, ticket_id: &str) -> anyhow::Result<bool>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub TicketHistoryRepo {}
    #[async_trait]
    impl TicketHistoryRepo for TicketHistoryRepo {
        async fn append(&self, entry: &NewHistoryEntry) -> anyhow::Result<()>;
        async fn find_by_ticket(&self, ticket_id: i64) -> anyhow::Result<Vec<TicketHistoryEntry>>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub ReportRepo {}
    #[async_trait]
    impl ReportRepo for ReportRepo {
        async fn insert(&self, report: &NewReport) -> anyhow::Result<NonConformityReport>;
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<NonConformityReport>>;
        async fn get_all(&self) -> anyhow::Result<Vec<NonConformityReport>>;
        async fn update(&self, report: &NonConformityReport) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}
