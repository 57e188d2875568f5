use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain_content::{
    command::{NewDepartment, UpdateDepartment},
    exception::{ContentException, ContentResult},
    model::{entity::Department, vo::DepartmentNode},
    repository::DepartmentRepo,
    service::DepartmentService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct DepartmentServiceImpl {
    department_repo: Arc<dyn DepartmentRepo>,
}

#[async_trait]
impl DepartmentService for DepartmentServiceImpl {
    async fn create(&self, department: NewDepartment) -> ContentResult<Department> {
        if let Some(parent_id) = department.parent_id {
            // A dangling parent would silently drop the department from
            // the tree view.
            self.get(parent_id).await?;
        }
        let department = self.department_repo.insert(&department).await?;
        self.department_repo.save_changed().await?;
        Ok(department)
    }

    async fn update(&self, id: i64, update: UpdateDepartment) -> ContentResult<Department> {
        let mut department = self.get(id).await?;
        if let Some(parent_id) = update.parent_id {
            self.get(parent_id).await?;
        }
        department.name = update.name;
        department.code = update.code;
        department.parent_id = update.parent_id;
        department.manager_email = update.manager_email;
        self.department_repo.update(&department).await?;
        self.department_repo.save_changed().await?;
        Ok(department)
    }

    async fn delete(&self, id: i64) -> ContentResult<()> {
        self.get(id).await?;
        if self.department_repo.has_children(id).await? {
            return Err(ContentException::DepartmentHasChildren { id });
        }
        self.department_repo.delete(id).await?;
        self.department_repo.save_changed().await?;
        tracing::info!(department_id = id, "department deleted");
        Ok(())
    }

    async fn get(&self, id: i64) -> ContentResult<Department> {
        self.department_repo
            .find_by_id(id)
            .await?
            .ok_or(ContentException::DepartmentNotFound { id })
    }

    async fn list(&self) -> ContentResult<Vec<Department>> {
        Ok(self.department_repo.get_all().await?)
    }

    async fn tree(&self) -> ContentResult<Vec<DepartmentNode>> {
        Ok(build_tree(self.department_repo.get_all().await?))
    }
}

/// Assembles the department hierarchy from the flat table. Departments
/// whose parent is missing surface as roots instead of disappearing.
pub fn build_tree(departments: Vec<Department>) -> Vec<DepartmentNode> {
    let known: Vec<i64> = departments.iter().map(|d| d.id).collect();
    let mut children_of: HashMap<i64, Vec<Department>> = HashMap::new();
    let mut roots = Vec::new();
    for department in departments {
        match department.parent_id {
            Some(parent_id) if known.contains(&parent_id) => {
                children_of.entry(parent_id).or_default().push(department);
            }
            _ => roots.push(department),
        }
    }

    fn attach(
        department: Department,
        children_of: &mut HashMap<i64, Vec<Department>>,
    ) -> DepartmentNode {
        let mut children = children_of.remove(&department.id).unwrap_or_default();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        let children = children.into_iter().map(|c| attach(c, children_of)).collect();
        DepartmentNode {
            department,
            children,
        }
    }

    roots.sort_by(|a, b| a.name.cmp(&b.name));
    roots.into_iter().map(|d| attach(d, &mut children_of)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain_content::mock::MockDepartmentRepo;

    fn department(id: i64, name: &str, parent_id: Option<i64>) -> Department {
        Department {
            id,
            name: name.into(),
            code: format!("D{id:03}"),
            parent_id,
            manager_email: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tree_nests_children_under_parents_sorted_by_name() {
        let tree = build_tree(vec![
            department(1, "Operations", None),
            department(2, "Quality", Some(1)),
            department(3, "Logistics", Some(1)),
            department(4, "Sales", None),
        ]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].department.name, "Operations");
        let child_names: Vec<_> =
            tree[0].children.iter().map(|n| n.department.name.as_str()).collect();
        assert_eq!(child_names, ["Logistics", "Quality"]);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn orphans_surface_as_roots() {
        let tree = build_tree(vec![department(2, "Quality", Some(99))]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].department.id, 2);
    }

    #[tokio::test]
    async fn delete_refuses_while_children_exist() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_find_by_id().return_once(|id| Ok(Some(department(id, "Operations", None))));
        repo.expect_has_children().return_once(|_| Ok(true));
        repo.expect_delete().never();

        let service =
            DepartmentServiceImpl::builder().department_repo(Arc::new(repo)).build();

        assert!(matches!(
            service.delete(1).await,
            Err(ContentException::DepartmentHasChildren { id: 1 })
        ));
    }

    #[tokio::test]
    async fn deleting_a_leaf_department_commits() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_find_by_id()
            .return_once(|id| Ok(Some(department(id, "Logistics", Some(1)))));
        repo.expect_has_children().return_once(|_| Ok(false));
        repo.expect_delete().withf(|id| *id == 3).once().returning(|_| Ok(()));
        repo.expect_save_changed().once().returning(|| Ok(true));

        let service =
            DepartmentServiceImpl::builder().department_repo(Arc::new(repo)).build();

        assert!(service.delete(3).await.is_ok());
    }
}
