use async_trait::async_trait;

use crate::command::NewBanner;
use crate::model::entity::Banner;

#[async_trait]
pub trait BannerRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Banner>>;
    /// All banners ordered by position.
    async fn get_all(&self) -> anyhow::Result<Vec<Banner>>;
    async fn insert(&self, banner: &NewBanner) -> anyhow::Result<Banner>;
    async fn update(&self, banner: &Banner) -> anyhow::Result<()>;
    async fn delete(&self, id: i64) -> anyhow::Result<()>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
