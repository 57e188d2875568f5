use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::command::NewNotification;
use crate::model::entity::EmailNotification;

#[async_trait]
pub trait NotificationRepo: Send + Sync {
    async fn insert(&self, notification: &NewNotification) -> anyhow::Result<EmailNotification>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<EmailNotification>>;
    async fn mark_sent(&self, id: i64, at: DateTime<Utc>) -> anyhow::Result<()>;
    async fn mark_failed(&self, id: i64, error: &str) -> anyhow::Result<()>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
