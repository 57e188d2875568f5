use chrono::Utc;
use domain_content::command::NewBanner;
use domain_content::model::entity::Banner;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
    pub starts_at: Option<DateTimeUtc>,
    pub ends_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Banner {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            image_url: m.image_url,
            link_url: m.link_url,
            position: m.position,
            active: m.active,
            starts_at: m.starts_at,
            ends_at: m.ends_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&NewBanner> for ActiveModel {
    fn from(b: &NewBanner) -> Self {
        let now = Utc::now();
        Self {
            id: Default::default(),
            title: Set(b.title.clone()),
            image_url: Set(b.image_url.clone()),
            link_url: Set(b.link_url.clone()),
            position: Set(b.position),
            active: Set(b.active),
            starts_at: Set(b.starts_at),
            ends_at: Set(b.ends_at),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

impl From<&Banner> for ActiveModel {
    fn from(b: &Banner) -> Self {
        Self {
            id: Set(b.id),
            title: Set(b.title.clone()),
            image_url: Set(b.image_url.clone()),
            link_url: Set(b.link_url.clone()),
            position: Set(b.position),
            active: Set(b.active),
            starts_at: Set(b.starts_at),
            ends_at: Set(b.ends_at),
            created_at: Set(b.created_at),
            updated_at: Set(Utc::now()),
        }
    }
}
