use async_trait::async_trait;

use crate::command::NewFavorite;
use crate::model::entity::Favorite;

#[async_trait]
pub trait FavoriteRepo: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Favorite>>;
    /// The user's favorites ordered by position.
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>>;
    async fn insert(&self, favorite: &NewFavorite) -> anyhow::Result<Favorite>;
    async fn delete(&self, id: i64) -> anyhow::Result<()>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
