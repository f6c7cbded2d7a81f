/// Genre used when nothing more specific fits. Always the last entry of [`GENRES`].
pub const OTHER_GENRE: &str = "Other";

/// Genres offered by the add form, in display order.
pub const GENRES: [&str; 16] = [
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Thriller",
    "Romance",
    "Horror",
    "Biography",
    "History",
    "Self-Help",
    "Business",
    "Science",
    "Travel",
    "Poetry",
    OTHER_GENRE,
];

/// Whether `genre` is one of the fixed entries (exact, case-sensitive).
pub fn is_listed_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

/// Index of `genre` in [`GENRES`], if listed.
pub fn genre_position(genre: &str) -> Option<usize> {
    GENRES.iter().position(|g| *g == genre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_last() {
        assert_eq!(GENRES.last(), Some(&OTHER_GENRE));
    }

    #[test]
    fn test_listed_genre_is_case_sensitive() {
        assert!(is_listed_genre("Science Fiction"));
        assert!(!is_listed_genre("science fiction"));
        assert!(!is_listed_genre("Cookbooks"));
    }

    #[test]
    fn test_genre_position() {
        assert_eq!(genre_position("Fiction"), Some(0));
        assert_eq!(genre_position("Other"), Some(15));
        assert_eq!(genre_position("Western"), None);
    }
}
