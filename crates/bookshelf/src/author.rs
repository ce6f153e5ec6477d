use core::fmt;
use serde::{Deserialize, Serialize};

/// Two authors are the same person only when every field matches.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    pub year_of_birth: Option<u16>,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            year_of_birth: None,
        }
    }

    pub fn born(mut self, year: u16) -> Self {
        self.year_of_birth = Some(year);
        self
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author({}, {}, ", self.first_name, self.last_name)?;
        match self.year_of_birth {
            Some(year) => write!(f, "{year})"),
            None => f.write_str("None)"),
        }
    }
}
