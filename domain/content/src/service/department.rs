use async_trait::async_trait;

use crate::command::{NewDepartment, UpdateDepartment};
use crate::exception::ContentResult;
use crate::model::{entity::Department, vo::DepartmentNode};

#[async_trait]
pub trait DepartmentService: Send + Sync {
    async fn create(&self, department: NewDepartment) -> ContentResult<Department>;
    async fn update(&self, id: i64, department: UpdateDepartment) -> ContentResult<Department>;
    /// Refused while child departments exist.
    async fn delete(&self, id: i64) -> ContentResult<()>;
    async fn get(&self, id: i64) -> ContentResult<Department>;
    async fn list(&self) -> ContentResult<Vec<Department>>;
    /// The whole hierarchy, children sorted by name.
    async fn tree(&self) -> ContentResult<Vec<DepartmentNode>>;
}
