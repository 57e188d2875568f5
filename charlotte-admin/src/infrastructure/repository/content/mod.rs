mod banner;
mod department;
mod favorite;
