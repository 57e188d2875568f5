mod feedback;
mod report;
mod ticket;
mod ticket_history;

#[rustfmt::skip]
pub use {
    feedback::FeedbackRepo,
    report::ReportRepo,
    ticket::TicketRepo,
    ticket_history::TicketHistoryRepo,
};
