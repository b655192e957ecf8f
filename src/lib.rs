use std::sync::Arc;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Router,
};
use sqlx::{migrate::Migrator, SqlitePool};
use tower_http::services::ServeDir;

pub mod models;
pub mod settings;
pub mod validation;
mod views;

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Error handed to the framework by any handler. Converting from another error
/// yields a 500; use [`AppError::not_found`] for a 404.
#[derive(Debug)]
pub struct AppError {
    status_code: StatusCode,
    error: anyhow::Error,
}

impl AppError {
    pub fn not_found(message: &str) -> Self {
        AppError {
            status_code: StatusCode::NOT_FOUND,
            error: anyhow::anyhow!(message.to_string()),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    title: String,
    message: String,
    status_code: StatusCode,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            log::error!("{}: {:#}", self.status_code, self.error);
        } else {
            log::warn!("{}: {}", self.status_code, self.error);
        }
        (
            self.status_code,
            ErrorPageTemplate {
                title: "Error".to_string(),
                status_code: self.status_code,
                message: self.error.to_string(),
            },
        )
            .into_response()
    }
}

// This enables using `?` on anything that converts into `anyhow::Error`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error: err.into(),
        }
    }
}

async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>404 Not found</h1><a href=\"/catalog/genres\">Back to genres</a>"),
    )
}

#[axum::debug_handler]
async fn redirect_to_genre_list() -> Redirect {
    Redirect::to("/catalog/genres")
}

/// Builds the catalog router. Static assets are only mounted when a directory
/// is given.
pub fn app(pool: Arc<SqlitePool>, static_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/", get(redirect_to_genre_list))
        .nest("/catalog/genres", views::genres::get_routes())
        .nest("/catalog/genre", views::genre::get_routes());

    let router = match static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router,
    };

    router.fallback(not_found).layer(Extension(pool))
}
