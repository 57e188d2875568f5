pub type SupportResult<T> = Result<T, SupportException>;

#[derive(Debug, thiserror::Error)]
pub enum SupportException {
    /// Also raised for syntactically invalid ticket identifiers; the
    /// source system never distinguished the two cases.
    #[error("Ticket not found: {ticket_id}")]
    TicketNotFound { ticket_id: String },

    #[error("Non-conformity report not found: {id}")]
    ReportNotFound { id: i64 },

    #[error("{message}")]
    Validation { message: String },

    #[error("Support internal error: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl SupportException {
    pub fn status(&self) -> u16 {
        match self {
            Self::TicketNotFound { .. } | Self::ReportNotFound { .. } => 404,
            Self::Validation { .. } => 400,
            Self::Internal { .. } => 500,
        }
    }
}

impl From<anyhow::Error> for SupportException {
    fn from(e: anyhow::Error) -> Self {
        SupportException::Internal { source: e }
    }
}
