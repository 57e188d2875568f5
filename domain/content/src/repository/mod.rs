mod banner;
mod department;
mod favorite;

#[rustfmt::skip]
pub use {
    banner::BannerRepo,
    department::DepartmentRepo,
    favorite::FavoriteRepo,
};
