mod feedback;
mod report;
mod ticket;

#[rustfmt::skip]
pub use {
    feedback::FeedbackServiceImpl,
    report::ReportServiceImpl,
    ticket::TicketServiceImpl,
};
