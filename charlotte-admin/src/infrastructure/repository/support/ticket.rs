use domain_support::{
    command::NewTicket,
    model::entity::Ticket,
    repository::TicketRepo,
};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl TicketRepo for OrmRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Ticket>> {
        TicketEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Ticket>> {
        let res = TicketEntity::find()
            .order_by_desc(TicketColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?;
        res.into_iter().map(TryInto::try_into).collect()
    }

    async fn insert(&self, ticket: &NewTicket) -> anyhow::Result<Ticket> {
        let txn = self.txn().await?;
        let model = TicketEntity::insert(TicketActiveModel::from(ticket))
            .exec_with_returning(&*txn)
            .await?;
        model.try_into()
    }

    async fn update(&self, ticket: &Ticket) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        TicketEntity::update(TicketActiveModel::from(ticket)).exec(&*txn).await?;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
