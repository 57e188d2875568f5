use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub code: String,
    pub parent_id: Option<i64>,
    pub manager_email: Option<String>,
}

/// Full-row replacement; absent optionals clear the column.
#[derive(Debug, Clone)]
pub struct UpdateDepartment {
    pub name: String,
    pub code: String,
    pub parent_id: Option<i64>,
    pub manager_email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewBanner {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct UpdateBanner {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub user_id: String,
    pub label: String,
    pub url: String,
    pub position: i32,
}
