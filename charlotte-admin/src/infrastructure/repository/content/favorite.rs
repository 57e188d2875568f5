use domain_content::{
    command::NewFavorite,
    model::entity::Favorite,
    repository::FavoriteRepo,
};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl FavoriteRepo for OrmRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Favorite>> {
        Ok(FavoriteEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Into::into))
    }

    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>> {
        let res = FavoriteEntity::find()
            .filter(FavoriteColumn::UserId.eq(user_id))
            .order_by_asc(FavoriteColumn::Position)
            .all(self.db.get_connection())
            .await?;
        Ok(res.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, favorite: &NewFavorite) -> anyhow::Result<Favorite> {
        let txn = self.txn().await?;
        let model = FavoriteEntity::insert(FavoriteActiveModel::from(favorite))
            .exec_with_returning(&*txn)
            .await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        FavoriteEntity::delete_by_id(id).exec(&*txn).await?;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
