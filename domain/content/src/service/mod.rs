mod banner;
mod department;
mod favorite;

#[rustfmt::skip]
pub use {
    banner::BannerService,
    department::DepartmentService,
    favorite::FavoriteService,
};
