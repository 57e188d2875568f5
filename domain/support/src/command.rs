use crate::model::entity::ReportSeverity;

/// Input of the feedback submission workflow.
///
/// The ticket identifier is kept textual on purpose: the feedback store
/// records it as submitted, and parsing to the ticket store's native
/// integer id happens inside the workflow.
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    pub ticket_id: String,
    pub knowledge: i32,
    pub timing: i32,
    pub escalation: i32,
    pub resolved: i32,
    pub comment: Option<String>,
    pub acting_user: Option<String>,
}

/// Feedback row staged for insertion; id and timestamp are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub ticket_id: String,
    pub knowledge: i32,
    pub timing: i32,
    pub escalation: i32,
    pub resolved: i32,
    pub comment: Option<String>,
}

impl From<&FeedbackSubmission> for NewFeedback {
    fn from(s: &FeedbackSubmission) -> Self {
        Self {
            ticket_id: s.ticket_id.clone(),
            knowledge: s.knowledge,
            timing: s.timing,
            escalation: s.escalation,
            resolved: s.resolved,
            comment: s.comment.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub subject: String,
    pub description: Option<String>,
    pub requester: Option<String>,
    pub assignee: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub department_id: Option<i64>,
    pub severity: ReportSeverity,
    pub reporter: Option<String>,
}
