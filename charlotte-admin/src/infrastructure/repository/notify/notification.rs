use chrono::{DateTime, Utc};
use domain_notify::{
    command::NewNotification,
    model::entity::{DeliveryStatus, EmailNotification},
    repository::NotificationRepo,
};
use sea_orm::prelude::*;
use sea_orm::Set;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl NotificationRepo for OrmRepo {
    async fn insert(&self, notification: &NewNotification) -> anyhow::Result<EmailNotification> {
        let txn = self.txn().await?;
        let model = NotificationEntity::insert(NotificationActiveModel::from(notification))
            .exec_with_returning(&*txn)
            .await?;
        model.try_into()
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<EmailNotification>> {
        NotificationEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn mark_sent(&self, id: i64, at: DateTime<Utc>) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        let model = NotificationActiveModel {
            id: Set(id),
            status: Set(DeliveryStatus::Sent as i32),
            sent_at: Set(Some(at)),
            ..Default::default()
        };
        NotificationEntity::update(model).exec(&*txn).await?;
        Ok(())
    }

    async fn mark_failed(&self, id: i64, error: &str) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        let model = NotificationActiveModel {
            id: Set(id),
            status: Set(DeliveryStatus::Failed as i32),
            error: Set(Some(error.to_string())),
            ..Default::default()
        };
        NotificationEntity::update(model).exec(&*txn).await?;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
