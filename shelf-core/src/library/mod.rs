mod manager;
pub mod query;

pub use manager::{LibraryError, LibraryManager, LoadOutcome};
pub use query::{genre_options, search, BookFilter};
