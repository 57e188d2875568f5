mod feedback;
mod report;
mod ticket;

#[rustfmt::skip]
pub use {
    feedback::FeedbackService,
    report::ReportService,
    ticket::TicketService,
};
