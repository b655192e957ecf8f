use askama::Template;

use crate::models::book::Book;

#[derive(Template)]
#[template(path = "components/book-table.html")]
pub struct BookTable {
    pub books: Vec<Book>,
}
