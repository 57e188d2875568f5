use std::sync::Arc;

use async_trait::async_trait;
use domain_content::{
    command::NewFavorite,
    exception::{ContentException, ContentResult},
    model::entity::Favorite,
    repository::FavoriteRepo,
    service::FavoriteService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct FavoriteServiceImpl {
    favorite_repo: Arc<dyn FavoriteRepo>,
}

#[async_trait]
impl FavoriteService for FavoriteServiceImpl {
    async fn add(&self, favorite: NewFavorite) -> ContentResult<Favorite> {
        let favorite = self.favorite_repo.insert(&favorite).await?;
        self.favorite_repo.save_changed().await?;
        Ok(favorite)
    }

    async fn remove(&self, id: i64, caller: &str) -> ContentResult<()> {
        let favorite = self
            .favorite_repo
            .find_by_id(id)
            .await?
            .ok_or(ContentException::FavoriteNotFound { id })?;
        if favorite.user_id != caller {
            return Err(ContentException::Forbidden { id });
        }
        self.favorite_repo.delete(id).await?;
        self.favorite_repo.save_changed().await?;
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> ContentResult<Vec<Favorite>> {
        Ok(self.favorite_repo.find_by_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain_content::mock::MockFavoriteRepo;

    #[tokio::test]
    async fn removing_someone_elses_favorite_is_forbidden() {
        let mut repo = MockFavoriteRepo::new();
        repo.expect_find_by_id().return_once(|id| {
            Ok(Some(Favorite {
                id,
                user_id: "owner".into(),
                label: "ERP".into(),
                url: "https://erp.example.com".into(),
                position: 0,
                created_at: Utc::now(),
            }))
        });
        repo.expect_delete().never();

        let service = FavoriteServiceImpl::builder().favorite_repo(Arc::new(repo)).build();

        assert!(matches!(
            service.remove(3, "intruder").await,
            Err(ContentException::Forbidden { id: 3 })
        ));
    }
}
