use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::book::BookError;

/// A checksum-verified ISBN-10 or ISBN-13, stored without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Accepts hyphens and spaces between digits. A trailing `X` is allowed
    /// for ISBN-10 and stands for ten.
    pub fn parse(raw: &str) -> Result<Self, BookError> {
        let compact: String = raw
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let valid = match compact.len() {
            10 => isbn10_checksum(&compact),
            13 => isbn13_checksum(&compact),
            _ => false,
        };
        if valid {
            Ok(Self(compact))
        } else {
            Err(BookError::InvalidIsbn(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_isbn13(&self) -> bool {
        self.0.len() == 13
    }
}

fn isbn10_checksum(code: &str) -> bool {
    let mut sum = 0u32;
    for (idx, c) in code.chars().enumerate() {
        let value = match c {
            'X' if idx == 9 => 10,
            _ => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += (10 - idx as u32) * value;
    }
    sum % 11 == 0
}

fn isbn13_checksum(code: &str) -> bool {
    let mut sum = 0u32;
    for (idx, c) in code.chars().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += if idx % 2 == 0 { d } else { d * 3 };
    }
    sum % 10 == 0
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Isbn::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Isbn::parse(&value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}
