use async_trait::async_trait;

use crate::command::{NewBanner, UpdateBanner};
use crate::exception::ContentResult;
use crate::model::entity::Banner;

#[async_trait]
pub trait BannerService: Send + Sync {
    async fn create(&self, banner: NewBanner) -> ContentResult<Banner>;
    async fn update(&self, id: i64, banner: UpdateBanner) -> ContentResult<Banner>;
    async fn delete(&self, id: i64) -> ContentResult<()>;
    async fn list(&self) -> ContentResult<Vec<Banner>>;
    /// Banners currently inside their display window, by position.
    async fn list_active(&self) -> ContentResult<Vec<Banner>>;
}
