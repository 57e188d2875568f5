use domain_content::{
    command::NewBanner,
    model::entity::Banner,
    repository::BannerRepo,
};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl BannerRepo for OrmRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Banner>> {
        Ok(BannerEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Into::into))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Banner>> {
        let res = BannerEntity::find()
            .order_by_asc(BannerColumn::Position)
            .all(self.db.get_connection())
            .await?;
        Ok(res.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, banner: &NewBanner) -> anyhow::Result<Banner> {
        let txn = self.txn().await?;
        let model = BannerEntity::insert(BannerActiveModel::from(banner))
            .exec_with_returning(&*txn)
            .await?;
        Ok(model.into())
    }

    async fn update(&self, banner: &Banner) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        BannerEntity::update(BannerActiveModel::from(banner)).exec(&*txn).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        BannerEntity::delete_by_id(id).exec(&*txn).await?;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
