use axum::{routing::get, Router};

mod genre_list;

pub fn get_routes() -> axum::Router {
    Router::new().route("/", get(genre_list::view_genre_list))
}
