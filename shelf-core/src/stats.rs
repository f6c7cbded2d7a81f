use crate::book::Book;

/// Number of books filed under one genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Aggregate counts over a library snapshot.
///
/// Derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// `read / total * 100`, or 0 for an empty library
    pub read_percentage: f64,
    /// Counts per genre in the order each genre first appears
    pub genre_counts: Vec<GenreCount>,
}

impl LibraryStats {
    pub fn compute(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|b| b.read).count();
        let read_percentage = if total == 0 {
            0.0
        } else {
            read as f64 / total as f64 * 100.0
        };

        let mut genre_counts: Vec<GenreCount> = Vec::new();
        for book in books {
            match genre_counts.iter_mut().find(|g| g.genre == book.genre) {
                Some(entry) => entry.count += 1,
                None => genre_counts.push(GenreCount {
                    genre: book.genre.clone(),
                    count: 1,
                }),
            }
        }

        Self {
            total,
            read,
            unread: total - read,
            read_percentage,
            genre_counts,
        }
    }

    /// The `limit` most common genres, highest count first.
    ///
    /// Ties keep first-encounter order.
    pub fn top_genres(&self, limit: usize) -> Vec<GenreCount> {
        let mut sorted = self.genre_counts.clone();
        // sort_by is stable
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(limit);
        sorted
    }

    pub fn genre_count(&self, genre: &str) -> usize {
        self.genre_counts
            .iter()
            .find(|g| g.genre == genre)
            .map_or(0, |g| g.count)
    }
}
