use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub genre_id: Option<i64>,
}

impl Book {
    pub fn summary_or_default(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }
}

pub async fn get_books_by_genre(pool: &SqlitePool, genre_id: i64) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, summary, genre_id
        FROM book
        WHERE book.genre_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(genre_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_book(
    pool: &SqlitePool,
    title: &str,
    summary: Option<&str>,
    genre_id: Option<i64>,
) -> Result<i64, sqlx::Error> {
    let (id,) = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO book (title, summary, genre_id)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(summary)
    .bind(genre_id)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn delete_book_by_id(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM book WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_summary_renders_empty() {
        let book = Book {
            id: 3,
            title: "The Hobbit".to_string(),
            summary: None,
            genre_id: Some(1),
        };
        assert_eq!(book.summary_or_default(), "");
    }
}
