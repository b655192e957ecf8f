use std::sync::Arc;

use askama::Template;
use axum::Extension;
use sqlx::SqlitePool;

use crate::{
    models::genre::{get_genre_list, Genre},
    AppError,
};

#[derive(Template)]
#[template(path = "genre-list.html")]
pub struct GenreList {
    title: &'static str,
    genres: Vec<Genre>,
}

#[axum::debug_handler]
pub async fn view_genre_list(
    Extension(pool): Extension<Arc<SqlitePool>>,
) -> Result<GenreList, AppError> {
    let genres = get_genre_list(&pool).await?;
    Ok(GenreList {
        title: "Genre List",
        genres,
    })
}
