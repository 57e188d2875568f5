mod feedback;
mod report;
mod ticket;
mod ticket_history;
