use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_content::{
    command::{NewBanner, UpdateBanner},
    exception::{ContentException, ContentResult},
    model::entity::Banner,
    repository::BannerRepo,
    service::BannerService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct BannerServiceImpl {
    banner_repo: Arc<dyn BannerRepo>,
}

impl BannerServiceImpl {
    async fn get(&self, id: i64) -> ContentResult<Banner> {
        self.banner_repo.find_by_id(id).await?.ok_or(ContentException::BannerNotFound { id })
    }
}

#[async_trait]
impl BannerService for BannerServiceImpl {
    async fn create(&self, banner: NewBanner) -> ContentResult<Banner> {
        let banner = self.banner_repo.insert(&banner).await?;
        self.banner_repo.save_changed().await?;
        Ok(banner)
    }

    async fn update(&self, id: i64, update: UpdateBanner) -> ContentResult<Banner> {
        let mut banner = self.get(id).await?;
        banner.title = update.title;
        banner.image_url = update.image_url;
        banner.link_url = update.link_url;
        banner.position = update.position;
        banner.active = update.active;
        banner.starts_at = update.starts_at;
        banner.ends_at = update.ends_at;
        self.banner_repo.update(&banner).await?;
        self.banner_repo.save_changed().await?;
        Ok(banner)
    }

    async fn delete(&self, id: i64) -> ContentResult<()> {
        self.get(id).await?;
        self.banner_repo.delete(id).await?;
        self.banner_repo.save_changed().await?;
        Ok(())
    }

    async fn list(&self) -> ContentResult<Vec<Banner>> {
        Ok(self.banner_repo.get_all().await?)
    }

    async fn list_active(&self) -> ContentResult<Vec<Banner>> {
        let now = Utc::now();
        Ok(self.banner_repo.get_all().await?.into_iter().filter(|b| b.is_live(now)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use domain_content::mock::MockBannerRepo;

    fn banner(id: i64, active: bool, expired: bool) -> Banner {
        let now = Utc::now();
        Banner {
            id,
            title: format!("banner-{id}"),
            image_url: "https://cdn.example.com/b.png".into(),
            link_url: None,
            position: id as i32,
            active,
            starts_at: None,
            ends_at: expired.then(|| now - Duration::hours(1)),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_active_drops_inactive_and_expired_banners() {
        let mut repo = MockBannerRepo::new();
        repo.expect_get_all()
            .return_once(|| Ok(vec![banner(1, true, false), banner(2, false, false), banner(3, true, true)]));

        let service = BannerServiceImpl::builder().banner_repo(Arc::new(repo)).build();

        let live = service.list_active().await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, 1);
    }

    #[tokio::test]
    async fn updating_a_missing_banner_is_not_found() {
        let mut repo = MockBannerRepo::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));
        repo.expect_update().never();

        let service = BannerServiceImpl::builder().banner_repo(Arc::new(repo)).build();

        let update = UpdateBanner {
            title: "x".into(),
            image_url: "https://cdn.example.com/x.png".into(),
            link_url: None,
            position: 0,
            active: true,
            starts_at: None,
            ends_at: None,
        };
        assert!(matches!(
            service.update(9, update).await,
            Err(ContentException::BannerNotFound { id: 9 })
        ));
    }
}
