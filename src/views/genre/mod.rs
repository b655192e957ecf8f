use axum::{routing::get, Router};

mod create;
mod delete;
mod details;
mod update;

pub fn get_routes() -> axum::Router {
    Router::new()
        .route(
            "/create",
            get(create::view_create_genre).post(create::post_create_genre),
        )
        .route("/:id", get(details::view_genre_details))
        .route(
            "/:id/delete",
            get(delete::view_delete_genre).post(delete::post_delete_genre),
        )
        .route(
            "/:id/update",
            get(update::view_update_genre).post(update::post_update_genre),
        )
}
