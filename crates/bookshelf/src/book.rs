use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::author::Author;
use crate::genre::Genre;
use crate::isbn::Isbn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("'{0}' is not a valid ISBN-10 or ISBN-13")]
    InvalidIsbn(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub language: String,
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
    pub year: u16,
    pub isbn: Isbn,
    pub description: Option<String>,
}

impl Book {
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        authors: Vec<Author>,
        genres: Vec<Genre>,
        year: u16,
        isbn: &str,
    ) -> Result<Self, BookError> {
        Ok(Self {
            name: name.into(),
            language: language.into(),
            authors,
            genres,
            year,
            isbn: Isbn::parse(isbn)?,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_author(&self, author: &Author) -> bool {
        self.authors.contains(author)
    }

    pub fn in_genre(&self, name: &str) -> bool {
        self.genres.iter().any(|genre| genre.name == name)
    }
}

/// Editions of the same title by the same people compare equal, regardless
/// of author order, ISBN or year.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name {
            return false;
        }
        let ours: HashSet<&Author> = self.authors.iter().collect();
        let theirs: HashSet<&Author> = other.authors.iter().collect();
        ours == theirs
    }
}

impl Eq for Book {}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.authors.is_empty() {
            let names = self
                .authors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " by {names}")?;
        }
        write!(f, " ({})", self.year)
    }
}
