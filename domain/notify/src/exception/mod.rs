pub type NotifyResult<T> = Result<T, NotifyException>;

#[derive(Debug, thiserror::Error)]
pub enum NotifyException {
    #[error("No email template registered under name: {name}")]
    TemplateNotFound { name: String },

    #[error("Template {name} failed to render: {reason}")]
    Render { name: String, reason: String },

    #[error("Mail transport rejected the message: {reason}")]
    Transport { reason: String },

    #[error("Notification not found: {id}")]
    NotificationNotFound { id: i64 },

    #[error("Notify internal error: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl NotifyException {
    pub fn status(&self) -> u16 {
        match self {
            Self::TemplateNotFound { .. } | Self::Render { .. } => 400,
            Self::NotificationNotFound { .. } => 404,
            Self::Transport { .. } => 502,
            Self::Internal { .. } => 500,
        }
    }
}

impl From<anyhow::Error> for NotifyException {
    fn from(e: anyhow::Error) -> Self {
        NotifyException::Internal { source: e }
    }
}
