//! Catalog records for a lending library: books, their authors and genres.

pub mod author;
pub mod book;
pub mod genre;
pub mod isbn;

pub use author::Author;
pub use book::{Book, BookError};
pub use genre::Genre;
pub use isbn::Isbn;
