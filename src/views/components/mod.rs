pub mod book_table;
