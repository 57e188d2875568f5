use domain_support::{
    model::entity::{NewHistoryEntry, TicketHistoryEntry},
    repository::TicketHistoryRepo,
};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl TicketHistoryRepo for OrmRepo {
    async fn append(&self, entry: &NewHistoryEntry) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        TicketHistoryEntity::insert(TicketHistoryActiveModel::from(entry)).exec(&*txn).await?;
        Ok(())
    }

    async fn find_by_ticket(&self, ticket_id: i64) -> anyhow::Result<Vec<TicketHistoryEntry>> {
        let res = TicketHistoryEntity::find()
            .filter(TicketHistoryColumn::TicketId.eq(ticket_id))
            .order_by_asc(TicketHistoryColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?;
        res.into_iter().map(TryInto::try_into).collect()
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
