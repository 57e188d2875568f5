use serde_json::Value;

/// Request to render and dispatch one email.
#[derive(Debug, Clone)]
pub struct NotifyCommand {
    pub recipient: String,
    pub subject: String,
    /// Registered template name.
    pub template: String,
    pub context: Value,
}

/// Notification row staged for insertion.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient: String,
    pub subject: String,
    pub template: String,
    pub context: Value,
}

impl From<&NotifyCommand> for NewNotification {
    fn from(c: &NotifyCommand) -> Self {
        Self {
            recipient: c.recipient.clone(),
            subject: c.subject.clone(),
            template: c.template.clone(),
            context: c.context.clone(),
        }
    }
}
