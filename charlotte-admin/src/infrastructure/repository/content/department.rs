use domain_content::{
    command::NewDepartment,
    model::entity::Department,
    repository::DepartmentRepo,
};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::infrastructure::database::model::prelude::*;
use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl DepartmentRepo for OrmRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Department>> {
        Ok(DepartmentEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Into::into))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Department>> {
        let res = DepartmentEntity::find()
            .order_by_asc(DepartmentColumn::Name)
            .all(self.db.get_connection())
            .await?;
        Ok(res.into_iter().map(Into::into).collect())
    }

    async fn has_children(&self, id: i64) -> anyhow::Result<bool> {
        let count = DepartmentEntity::find()
            .filter(DepartmentColumn::ParentId.eq(id))
            .count(self.db.get_connection())
            .await?;
        Ok(count > 0)
    }

    async fn insert(&self, department: &NewDepartment) -> anyhow::Result<Department> {
        let txn = self.txn().await?;
        let model = DepartmentEntity::insert(DepartmentActiveModel::from(department))
            .exec_with_returning(&*txn)
            .await?;
        Ok(model.into())
    }

    async fn update(&self, department: &Department) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        DepartmentEntity::update(DepartmentActiveModel::from(department)).exec(&*txn).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<()> {
        let txn = self.txn().await?;
        DepartmentEntity::delete_by_id(id).exec(&*txn).await?;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}
