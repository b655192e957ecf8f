use std::sync::Arc;

use askama::Template;
use askama_axum::IntoResponse;
use axum::{
    response::{Redirect, Response},
    Extension,
};
use axum_extra::extract::Form;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    models::genre::{get_genre_by_name, insert_genre, GenreDraft},
    validation::{Field, FieldError},
    AppError,
};

const GENRE_NAME_MIN_LENGTH: usize = 2;

#[derive(Template)]
#[template(path = "genre-form.html")]
pub struct GenreForm {
    title: &'static str,
    genre: Option<GenreDraft>,
    errors: Vec<FieldError>,
}

impl GenreForm {
    fn new(genre: Option<GenreDraft>, errors: Vec<FieldError>) -> Self {
        GenreForm {
            title: "Create New Genre",
            genre,
            errors,
        }
    }

    fn submitted_name(&self) -> &str {
        self.genre.as_ref().map_or("", |genre| genre.name.as_str())
    }
}

#[axum::debug_handler]
pub async fn view_create_genre() -> GenreForm {
    GenreForm::new(None, Vec::new())
}

#[derive(Deserialize)]
pub struct CreateGenreInput {
    #[serde(default)]
    name: String,
}

#[axum::debug_handler]
pub async fn post_create_genre(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Form(data): Form<CreateGenreInput>,
) -> Result<Response, AppError> {
    let (name, errors) = Field::new("name", &data.name)
        .trim()
        .min_length(GENRE_NAME_MIN_LENGTH, "Genre Name Necessary")
        .escape()
        .finish();
    let draft = GenreDraft { name };

    if !errors.is_empty() {
        return Ok(GenreForm::new(Some(draft), errors).into_response());
    }

    // Not atomic: two concurrent submissions of a new name can both insert.
    if let Some(existing) = get_genre_by_name(&pool, &draft.name).await? {
        log::debug!("genre {:?} already exists as {}", draft.name, existing.id);
        return Ok(Redirect::to(&existing.url()).into_response());
    }

    let genre = insert_genre(&pool, &draft).await?;
    log::info!("created genre {} ({:?})", genre.id, genre.name);
    Ok(Redirect::to(&genre.url()).into_response())
}
