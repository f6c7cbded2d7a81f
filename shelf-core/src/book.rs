use chrono::Datelike;
use serde::{Deserialize, Serialize};
use shelf_common::OTHER_GENRE;
use std::fmt;
use thiserror::Error;

/// Earliest publication year accepted by the add form
pub const MIN_YEAR: i32 = 1000;

/// Year the add form starts at
pub const DEFAULT_YEAR: i32 = 2020;

/// Latest accepted publication year (the current local year).
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Stable opaque identifier assigned to a book when it is created.
///
/// Removal and toggling go through the id, so duplicate entries stay
/// distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A tracked book as stored in `library.json`.
///
/// Files written before ids existed have no `id` key; those records get a
/// fresh id on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }

    /// `by <author> (<year>) - <genre>`
    pub fn byline(&self) -> String {
        format!("by {} ({}) - {}", self.author, self.year, self.genre)
    }
}

/// Add form validation failures. Nothing is mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title and author are required!")]
    MissingTitle,
    #[error("Title and author are required!")]
    MissingAuthor,
    #[error("Publication year must be between {min} and {max}, got {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

/// Unvalidated input for a new book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Check required fields and build a [`Book`] with a fresh id.
    ///
    /// Title and author are trimmed and must be non-empty. A blank genre
    /// falls back to "Other".
    pub fn validate(self) -> Result<Book, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(ValidationError::MissingAuthor);
        }

        let max = current_year();
        if !(MIN_YEAR..=max).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange {
                year: self.year,
                min: MIN_YEAR,
                max,
            });
        }

        let genre = match self.genre.trim() {
            "" => OTHER_GENRE.to_string(),
            g => g.to_string(),
        };

        Ok(Book {
            id: BookId::new(),
            title: title.to_string(),
            author: author.to_string(),
            year: self.year,
            genre,
            read: self.read,
        })
    }
}
