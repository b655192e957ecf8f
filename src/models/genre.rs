use sqlx::SqlitePool;

use super::book::{get_books_by_genre, Book};

#[derive(Debug, Clone, sqlx::FromRow, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// A submitted genre that has not been persisted. It is only ever handed back
/// to the create form or passed to [`insert_genre`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenreDraft {
    pub name: String,
}

pub async fn get_genre_list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
    sqlx::query_as::<_, Genre>(
        r#"
        SELECT id, name
        FROM genre
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_genre_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Genre>, sqlx::Error> {
    sqlx::query_as::<_, Genre>("SELECT id, name FROM genre WHERE genre.id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_genre_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<Genre>, sqlx::Error> {
    sqlx::query_as::<_, Genre>("SELECT id, name FROM genre WHERE genre.name = ? LIMIT 1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn insert_genre(pool: &SqlitePool, draft: &GenreDraft) -> Result<Genre, sqlx::Error> {
    sqlx::query_as::<_, Genre>(
        r#"
        INSERT INTO genre (name)
        VALUES (?)
        RETURNING id, name
        "#,
    )
    .bind(&draft.name)
    .fetch_one(pool)
    .await
}

pub async fn delete_genre_by_id(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM genre WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Reads a genre and the books that reference it. Both queries run
/// concurrently and the first failure wins.
pub async fn get_genre_and_books(
    pool: &SqlitePool,
    id: i64,
) -> Result<(Option<Genre>, Vec<Book>), sqlx::Error> {
    futures::try_join!(get_genre_by_id(pool, id), get_books_by_genre(pool, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_url_uses_catalog_prefix() {
        let genre = Genre {
            id: 7,
            name: "Poetry".to_string(),
        };
        assert_eq!(genre.url(), "/catalog/genre/7");
    }
}
