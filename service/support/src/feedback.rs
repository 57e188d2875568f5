use std::sync::Arc;

use async_trait::async_trait;
use domain_support::{
    command::{FeedbackSubmission, NewFeedback},
    exception::{SupportException, SupportResult},
    model::entity::{Feedback, NewHistoryEntry, TicketStatus},
    repository::{FeedbackRepo, TicketHistoryRepo, TicketRepo},
    service::FeedbackService,
};
use typed_builder::TypedBuilder;

/// History description for the feedback-triggered transition.
const COMPLETED_DESCRIPTION: &str = "Ticket completed after feedback submission";

/// The three repositories share one request-scoped unit of work, so a
/// single `save_changed` commits every staged write together.
#[derive(TypedBuilder)]
pub struct FeedbackServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    feedback_repo: Arc<dyn FeedbackRepo>,
    history_repo: Arc<dyn TicketHistoryRepo>,
}

#[async_trait]
impl FeedbackService for FeedbackServiceImpl {
    async fn submit(&self, submission: FeedbackSubmission) -> SupportResult<Feedback> {
        // A malformed identifier is reported as not-found, matching the
        // long-standing API contract.
        let ticket_id: i64 = submission.ticket_id.parse().map_err(|_| {
            SupportException::TicketNotFound {
                ticket_id: submission.ticket_id.clone(),
            }
        })?;

        let Some(mut ticket) = self.ticket_repo.find_by_id(ticket_id).await? else {
            return Err(SupportException::TicketNotFound {
                ticket_id: submission.ticket_id,
            });
        };

        let feedback = self.feedback_repo.insert(&NewFeedback::from(&submission)).await?;

        if ticket.status != TicketStatus::Completed {
            let old_status = ticket.status;
            ticket.status = TicketStatus::Completed;
            self.ticket_repo.update(&ticket).await?;
            self.history_repo
                .append(&NewHistoryEntry::status_changed(
                    ticket_id,
                    submission.acting_user,
                    old_status,
                    TicketStatus::Completed,
                    COMPLETED_DESCRIPTION,
                ))
                .await?;
            tracing::info!(ticket_id, ?old_status, "ticket completed by feedback submission");
        }

        self.feedback_repo.save_changed().await?;
        Ok(feedback)
    }

    async fn exists_for_ticket(&self, ticket_id: &str) -> SupportResult<bool> {
        Ok(self.feedback_repo.exists_for_ticket(ticket_id).await?)
    }

    async fn find_by_ticket(&self, ticket_id: &str) -> SupportResult<Vec<Feedback>> {
        Ok(self.feedback_repo.find_by_ticket(ticket_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain_support::mock::{MockFeedbackRepo, MockTicketHistoryRepo, MockTicketRepo};
    use domain_support::model::entity::Ticket;

    fn ticket(id: i64, status: TicketStatus) -> Ticket {
        Ticket {
            id,
            subject: "Pump P-104 leaking".into(),
            description: None,
            status,
            requester: Some("u-17".into()),
            assignee: Some("agent-3".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn submission(ticket_id: &str) -> FeedbackSubmission {
        FeedbackSubmission {
            ticket_id: ticket_id.into(),
            knowledge: 1,
            timing: 2,
            escalation: 0,
            resolved: 1,
            comment: None,
            acting_user: Some("u-17".into()),
        }
    }

    fn feedback_row(ticket_id: &str) -> Feedback {
        Feedback {
            id: 42,
            ticket_id: ticket_id.into(),
            knowledge: 1,
            timing: 2,
            escalation: 0,
            resolved: 1,
            comment: None,
            created_at: Utc::now(),
        }
    }

    fn service(
        ticket_repo: MockTicketRepo,
        feedback_repo: MockFeedbackRepo,
        history_repo: MockTicketHistoryRepo,
    ) -> FeedbackServiceImpl {
        FeedbackServiceImpl::builder()
            .ticket_repo(Arc::new(ticket_repo))
            .feedback_repo(Arc::new(feedback_repo))
            .history_repo(Arc::new(history_repo))
            .build()
    }

    #[tokio::test]
    async fn unknown_ticket_is_not_found_and_nothing_is_written() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo.expect_find_by_id().return_once(|_| Ok(None));
        let mut feedback_repo = MockFeedbackRepo::new();
        feedback_repo.expect_insert().never();
        feedback_repo.expect_save_changed().never();
        let mut history_repo = MockTicketHistoryRepo::new();
        history_repo.expect_append().never();

        let result =
            service(ticket_repo, feedback_repo, history_repo).submit(submission("999999")).await;

        assert!(matches!(
            result,
            Err(SupportException::TicketNotFound { ticket_id }) if ticket_id == "999999"
        ));
    }

    #[tokio::test]
    async fn malformed_ticket_id_is_not_found_without_a_lookup() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo.expect_find_by_id().never();
        let mut feedback_repo = MockFeedbackRepo::new();
        feedback_repo.expect_insert().never();
        feedback_repo.expect_save_changed().never();

        let result = service(ticket_repo, feedback_repo, MockTicketHistoryRepo::new())
            .submit(submission("not-a-number"))
            .await;

        assert!(matches!(result, Err(SupportException::TicketNotFound { .. })));
    }

    #[tokio::test]
    async fn open_ticket_is_completed_and_history_is_appended_once() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo.expect_find_by_id().return_once(|id| Ok(Some(ticket(id, TicketStatus::Open))));
        ticket_repo
            .expect_update()
            .withf(|t| t.status == TicketStatus::Completed)
            .once()
            .returning(|_| Ok(()));
        let mut feedback_repo = MockFeedbackRepo::new();
        feedback_repo.expect_insert().once().returning(|f| {
            let mut row = feedback_row(&f.ticket_id);
            row.knowledge = f.knowledge;
            Ok(row)
        });
        feedback_repo.expect_save_changed().once().returning(|| Ok(true));
        let mut history_repo = MockTicketHistoryRepo::new();
        history_repo
            .expect_append()
            .withf(|entry| {
                entry.old_values["status"] == "OPEN"
                    && entry.new_values["status"] == "COMPLETED"
                    && entry.user_id.as_deref() == Some("u-17")
                    && entry.metadata.is_empty()
            })
            .once()
            .returning(|_| Ok(()));

        let feedback = service(ticket_repo, feedback_repo, history_repo)
            .submit(submission("17"))
            .await
            .unwrap();

        assert_eq!(feedback.ticket_id, "17");
        assert_eq!(feedback.id, 42);
    }

    #[tokio::test]
    async fn completed_ticket_still_takes_feedback_but_stays_untouched() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo
            .expect_find_by_id()
            .return_once(|id| Ok(Some(ticket(id, TicketStatus::Completed))));
        ticket_repo.expect_update().never();
        let mut feedback_repo = MockFeedbackRepo::new();
        feedback_repo.expect_insert().once().returning(|f| Ok(feedback_row(&f.ticket_id)));
        feedback_repo.expect_save_changed().once().returning(|| Ok(true));
        let mut history_repo = MockTicketHistoryRepo::new();
        history_repo.expect_append().never();

        let result =
            service(ticket_repo, feedback_repo, history_repo).submit(submission("17")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn history_failure_prevents_the_commit() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo.expect_find_by_id().return_once(|id| Ok(Some(ticket(id, TicketStatus::Open))));
        ticket_repo.expect_update().once().returning(|_| Ok(()));
        let mut feedback_repo = MockFeedbackRepo::new();
        feedback_repo.expect_insert().once().returning(|f| Ok(feedback_row(&f.ticket_id)));
        feedback_repo.expect_save_changed().never();
        let mut history_repo = MockTicketHistoryRepo::new();
        history_repo
            .expect_append()
            .once()
            .returning(|_| Err(anyhow::anyhow!("ticket_history insert failed")));

        let result =
            service(ticket_repo, feedback_repo, history_repo).submit(submission("17")).await;

        assert!(matches!(result, Err(SupportException::Internal { .. })));
    }

    #[tokio::test]
    async fn exists_for_ticket_reflects_the_store() {
        let mut feedback_repo = MockFeedbackRepo::new();
        feedback_repo
            .expect_exists_for_ticket()
            .withf(|id| id == "17")
            .once()
            .returning(|_| Ok(true));

        let service =
            service(MockTicketRepo::new(), feedback_repo, MockTicketHistoryRepo::new());

        assert!(service.exists_for_ticket("17").await.unwrap());
    }
}
