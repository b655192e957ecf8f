use std::sync::Arc;

use askama::Template;
use axum::{debug_handler, extract::Path, Extension};
use sqlx::SqlitePool;

use crate::{
    models::genre::{get_genre_and_books, Genre},
    views::components::book_table::BookTable,
    AppError,
};

#[derive(Template)]
#[template(path = "genre-detail.html")]
pub struct GenreDetails {
    title: &'static str,
    genre: Genre,
    book_table: BookTable,
}

#[debug_handler]
pub async fn view_genre_details(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(id): Path<i64>,
) -> Result<GenreDetails, AppError> {
    let (genre, books) = get_genre_and_books(&pool, id).await?;
    let genre = match genre {
        Some(genre) => genre,
        None => return Err(AppError::not_found("Genre not found")),
    };

    Ok(GenreDetails {
        title: "Genre Detail",
        genre,
        book_table: BookTable { books },
    })
}
