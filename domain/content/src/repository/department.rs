use async_trait::async_trait;

use crate::command::NewDepartment;
use crate::model::entity::Department;

#[async_trait]
pub trait DepartmentRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Department>>;
    async fn get_all(&self) -> anyhow::Result<Vec<Department>>;
    async fn has_children(&self, id: i64) -> anyhow::Result<bool>;
    async fn insert(&self, department: &NewDepartment) -> anyhow::Result<Department>;
    async fn update(&self, department: &Department) -> anyhow::Result<()>;
    async fn delete(&self, id: i64) -> anyhow::Result<()>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
