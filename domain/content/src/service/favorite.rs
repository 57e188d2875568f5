use async_trait::async_trait;

use crate::command::NewFavorite;
use crate::exception::ContentResult;
use crate::model::entity::Favorite;

#[async_trait]
pub trait FavoriteService: Send + Sync {
    async fn add(&self, favorite: NewFavorite) -> ContentResult<Favorite>;
    /// Only the owner may remove a favorite.
    async fn remove(&self, id: i64, caller: &str) -> ContentResult<()>;
    async fn list_for_user(&self, user_id: &str) -> ContentResult<Vec<Favorite>>;
}
