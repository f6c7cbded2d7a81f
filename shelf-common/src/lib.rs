mod genre;
mod read_filter;

pub use genre::{genre_position, is_listed_genre, GENRES, OTHER_GENRE};
pub use read_filter::ReadFilter;
