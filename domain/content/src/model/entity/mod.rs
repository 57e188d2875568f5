mod banner;
mod department;
mod favorite;

#[rustfmt::skip]
pub use {
    banner::Banner,
    department::Department,
    favorite::Favorite,
};
