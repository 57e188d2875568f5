use async_trait::async_trait;

use crate::command::NotifyCommand;
use crate::exception::NotifyResult;
use crate::model::entity::EmailNotification;

#[async_trait]
pub trait MailService: Send + Sync {
    /// Records the notification, renders its template and dispatches it.
    /// The returned row carries the delivery outcome; render and
    /// transport failures are also surfaced as errors after the row is
    /// marked failed.
    async fn notify(&self, command: NotifyCommand) -> NotifyResult<EmailNotification>;
    async fn get(&self, id: i64) -> NotifyResult<EmailNotification>;
}
