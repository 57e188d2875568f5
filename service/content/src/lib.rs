mod banner;
mod department;
mod favorite;

#[rustfmt::skip]
pub use {
    banner::BannerServiceImpl,
    department::DepartmentServiceImpl,
    favorite::FavoriteServiceImpl,
};
