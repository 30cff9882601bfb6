pub mod admin;
pub mod artworks;
