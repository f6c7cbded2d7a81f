//! Read-only views over a library: list filters and title/author search.

use crate::book::Book;
use shelf_common::ReadFilter;

/// Filters for the library list. The default passes every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Exact genre to keep; `None` means all genres
    pub genre: Option<String>,
    pub status: ReadFilter,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        let genre_ok = self.genre.as_deref().map_or(true, |g| book.genre == g);
        genre_ok && self.status.matches(book.read)
    }

    /// Matching books, in library order.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Case-insensitive substring search over title and author.
///
/// A blank term matches nothing.
pub fn search<'a>(books: &'a [Book], term: &str) -> Vec<&'a Book> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    books
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Distinct genres present in `books`, sorted.
pub fn genre_options(books: &[Book]) -> Vec<String> {
    let mut genres: Vec<String> = books.iter().map(|b| b.genre.clone()).collect();
    genres.sort();
    genres.dedup();
    genres
}
