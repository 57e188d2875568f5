use chrono::Utc;
use domain_content::command::NewDepartment;
use domain_content::model::entity::Department;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub code: String,
    pub parent_id: Option<i64>,
    pub manager_email: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Department {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            code: m.code,
            parent_id: m.parent_id,
            manager_email: m.manager_email,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&NewDepartment> for ActiveModel {
    fn from(d: &NewDepartment) -> Self {
        let now = Utc::now();
        Self {
            id: Default::default(),
            name: Set(d.name.clone()),
            code: Set(d.code.clone()),
            parent_id: Set(d.parent_id),
            manager_email: Set(d.manager_email.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

impl From<&Department> for ActiveModel {
    fn from(d: &Department) -> Self {
        Self {
            id: Set(d.id),
            name: Set(d.name.clone()),
            code: Set(d.code.clone()),
            parent_id: Set(d.parent_id),
            manager_email: Set(d.manager_email.clone()),
            created_at: Set(d.created_at),
            updated_at: Set(Utc::now()),
        }
    }
}
