use async_trait::async_trait;
use mockall::mock;

use crate::command::{NewBanner, NewDepartment, NewFavorite};
use crate::model::entity::{Banner, Department, Favorite};
use crate::repository::{BannerRepo, DepartmentRepo, FavoriteRepo};

mock! {
    pub DepartmentRepo {}
    #[async_trait]
    impl DepartmentRepo for DepartmentRepo {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Department>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Department>>;
        async fn has_children(&self, id: i64) -> anyhow::Result<bool>;
        async fn insert(&self, department: &NewDepartment) -> anyhow::Result<Department>;
        async fn update(&self, department: &Department) -> anyhow::Result<()>;
        async fn delete(&self, id: i64) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub BannerRepo {}
    #[async_trait]
    impl BannerRepo for BannerRepo {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Banner>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Banner>>;
        async fn insert(&self, banner: &NewBanner) -> anyhow::Result<Banner>;
        async fn update(&self, banner: &Banner) -> anyhow::Result<()>;
        async fn delete(&self, id: i64) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub FavoriteRepo {}
    #[async_trait]
    impl FavoriteRepo for FavoriteRepo {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Favorite>>;
        async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Favorite>>;
        async fn insert(&self, favorite: &NewFavorite) -> anyhow::Result<Favorite>;
        async fn delete(&self, id: i64) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}
