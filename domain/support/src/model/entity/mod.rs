mod feedback;
mod report;
mod ticket;
mod ticket_history;

#[rustfmt::skip]
pub use {
    feedback::Feedback,
    report::{NonConformityReport, ReportSeverity, ReportStatus},
    ticket::{Ticket, TicketStatus},
    ticket_history::{HistoryAction, NewHistoryEntry, TicketHistoryEntry},
};
