use domain_support::{
    command::NewFeedback,
    model::entity::Feedback,
    repository::FeedbackRepo,
};
use sea_orm::prelude::*;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl FeedbackRepo for OrmRepo {
    async fn insert(&self, feedback: &NewFeedback) -> anyhow::Result<Feedback> {
        let txn = self.txn().await?;
        let model = FeedbackEntity::insert(FeedbackActiveModel::from(feedback))
            .exec_with_returning(&*txn)
            .await?;
        Ok(model.into())
    }

    async fn find_by_ticket(&self, ticket_id: &str) -> anyhow::Result<Vec<Feedback>> {
        let res = FeedbackEntity::find()
            .filter(FeedbackColumn::TicketId.eq(ticket_id))
            .all(self.db.get_connection())
            .await?;
        Ok(res.into_iter().map(Into::into).collect())
    }

    async fn exists_for_ticket(&self, ticket_id: &str) -> anyhow::Result<bool> {
        let count = FeedbackEntity::find()
            .filter(FeedbackColumn::TicketId.eq(ticket_id))
            .count(self.db.get_connection())
            .await?;
        Ok(count > 0)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
