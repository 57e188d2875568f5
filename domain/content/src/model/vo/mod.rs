use serde::Serialize;

use crate::model::entity::Department;

/// Department with its resolved children, as returned by the tree query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentNode {
    #[serde(flatten)]
    pub department: Department,
    pub children: Vec<DepartmentNode>,
}
