use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::command::NewNotification;
use crate::model::entity::EmailNotification;
use crate::model::vo::{DriveFolder, RenderedMail};
use crate::repository::NotificationRepo;
use crate::service::{DriveService, MailSender};

mock! {
    pub NotificationRepo {}
    #[async_trait]
    impl NotificationRepo for NotificationRepo {
        async fn insert(&self, notification: &NewNotification) -> anyhow::Result<EmailNotification>;
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<EmailNotification>>;
        async fn mark_sent(&self, id: i64, at: DateTime<Utc>) -> anyhow::Result<()>;
        async fn mark_failed(&self, id: i64, error: &str) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub MailSender {}
    #[async_trait]
    impl MailSender for MailSender {
        async fn send(&self, mail: &RenderedMail) -> anyhow::Result<()>;
    }
}

mock! {
    pub DriveService {}
    #[async_trait]
    impl DriveService for DriveService {
        async fn ensure_folder(&self, name: &str) -> anyhow::Result<DriveFolder>;
    }
}
