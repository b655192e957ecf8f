pub mod components;
pub mod genre;
pub mod genres;
