use domain_support::{
    command::NewReport,
    model::entity::NonConformityReport,
    repository::ReportRepo,
};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ReportRepo for OrmRepo {
    async fn insert(&self, report: &NewReport) -> anyhow::Result<NonConformityReport> {
        let txn = self.txn().await?;
        let model = ReportEntity::insert(ReportActiveModel::from(report))
            .exec_with_returning(&*txn)
            .await?;
        model.try_into()
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<NonConformityReport>> {
        ReportEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<NonConformityReport>> {
        let res = ReportEntity::find()
            .order_by_desc(ReportColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?;
        res.into_iter().map(TryInto::try_into).collect()
    }

    async fn update(&self, report: &NonConformityReport) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        ReportEntity::update(ReportActiveModel::from(report)).exec(&*txn).await?;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
