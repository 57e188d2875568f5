use chrono::Utc;
use domain_content::command::NewFavorite;
use domain_content::model::entity::Favorite;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub label: String,
    pub url: String,
    pub position: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Favorite {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            label: m.label,
            url: m.url,
            position: m.position,
            created_at: m.created_at,
        }
    }
}

impl From<&NewFavorite> for ActiveModel {
    fn from(f: &NewFavorite) -> Self {
        Self {
            id: Default::default(),
            user_id: Set(f.user_id.clone()),
            label: Set(f.label.clone()),
            url: Set(f.url.clone()),
            position: Set(f.position),
            created_at: Set(Utc::now()),
        }
    }
}
