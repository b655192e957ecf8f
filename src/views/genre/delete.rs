use std::sync::Arc;

use askama::Template;
use askama_axum::IntoResponse;
use axum::{
    extract::Path,
    response::{Redirect, Response},
    Extension,
};
use axum_extra::extract::Form;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    models::{
        book::Book,
        genre::{delete_genre_by_id, get_genre_and_books, Genre},
    },
    views::components::book_table::BookTable,
    AppError,
};

const GENRE_LIST_URL: &str = "/catalog/genres";

#[derive(Template)]
#[template(path = "genre-delete.html")]
pub struct GenreDelete {
    title: &'static str,
    genre: Genre,
    book_table: BookTable,
}

impl GenreDelete {
    fn new(genre: Genre, books: Vec<Book>) -> Self {
        GenreDelete {
            title: "Delete Genre",
            genre,
            book_table: BookTable { books },
        }
    }
}

#[axum::debug_handler]
pub async fn view_delete_genre(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let (genre, books) = get_genre_and_books(&pool, id).await?;
    match genre {
        Some(genre) => Ok(GenreDelete::new(genre, books).into_response()),
        None => Ok(Redirect::to(GENRE_LIST_URL).into_response()),
    }
}

#[derive(Deserialize)]
pub struct DeleteGenreInput {
    genre: i64,
}

/// The genre id comes from the form body. Dependents are re-read here rather
/// than trusting whatever the confirmation page showed.
#[axum::debug_handler]
pub async fn post_delete_genre(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Form(data): Form<DeleteGenreInput>,
) -> Result<Response, AppError> {
    let (genre, books) = get_genre_and_books(&pool, data.genre).await?;
    let genre = match genre {
        Some(genre) => genre,
        None => return Ok(Redirect::to(GENRE_LIST_URL).into_response()),
    };

    if !books.is_empty() {
        log::debug!(
            "refusing to delete genre {}: {} book(s) still reference it",
            genre.id,
            books.len()
        );
        return Ok(GenreDelete::new(genre, books).into_response());
    }

    delete_genre_by_id(&pool, genre.id).await?;
    log::info!("deleted genre {}", genre.id);
    Ok(Redirect::to(GENRE_LIST_URL).into_response())
}
