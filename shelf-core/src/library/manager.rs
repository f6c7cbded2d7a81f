use crate::book::{Book, BookId, NewBook, ValidationError};
use crate::storage::{BookFile, StorageError};
use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result of reloading the library from its backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and replaced the in-memory library
    Loaded(usize),
    /// No file yet; the in-memory library was left alone
    NotFound,
}

/// The in-memory library and its backing file.
///
/// Handles:
/// - Full replacement from disk (load) and explicit saves
/// - Add / remove / toggle-read, each followed by a save
/// - Read-only access for rendering and queries
///
/// Every mutation is persisted before it returns. If that save fails the
/// mutation is undone, so memory never runs ahead of the file.
#[derive(Debug)]
pub struct LibraryManager {
    books: Vec<Book>,
    file: BookFile,
    last_saved: Option<DateTime<Local>>,
}

impl LibraryManager {
    /// Create an empty library backed by `file`. Nothing is read yet.
    pub fn new(file: BookFile) -> Self {
        Self {
            books: Vec::new(),
            file,
            last_saved: None,
        }
    }

    /// Create a library and load whatever `file` already holds.
    pub fn open(file: BookFile) -> Result<Self, LibraryError> {
        let mut manager = Self::new(file);
        manager.load()?;
        Ok(manager)
    }

    pub fn file(&self) -> &BookFile {
        &self.file
    }

    /// Replace the in-memory library with the file contents.
    ///
    /// On error the current books are kept as they were.
    pub fn load(&mut self) -> Result<LoadOutcome, LibraryError> {
        match self.file.load()? {
            Some(books) => {
                let count = books.len();
                self.books = books;
                self.last_saved = Some(Local::now());
                Ok(LoadOutcome::Loaded(count))
            }
            None => Ok(LoadOutcome::NotFound),
        }
    }

    /// Write the whole library to disk.
    pub fn save(&mut self) -> Result<(), LibraryError> {
        self.last_saved = Some(self.file.save(&self.books)?);
        Ok(())
    }

    /// When the library was last written (or read) successfully
    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        self.last_saved
    }

    /// Validate and append a new book, then save.
    pub fn add(&mut self, new_book: NewBook) -> Result<BookId, LibraryError> {
        let book = new_book.validate()?;
        let id = book.id.clone();
        self.books.push(book);

        if let Err(e) = self.save() {
            let book = self.books.pop();
            warn!(
                "Discarding unsaved book '{}'",
                book.map(|b| b.title).unwrap_or_default()
            );
            return Err(e);
        }

        info!("Added book {} ({} total)", id, self.books.len());
        Ok(id)
    }

    /// Remove the book at `index`, then save.
    ///
    /// Returns `Ok(false)` without touching anything when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<bool, LibraryError> {
        if index >= self.books.len() {
            return Ok(false);
        }
        self.remove_index(index)?;
        Ok(true)
    }

    /// Remove the book with `id`, then save. Returns the removed book.
    pub fn remove(&mut self, id: &BookId) -> Result<Option<Book>, LibraryError> {
        match self.position(id) {
            Some(index) => self.remove_index(index).map(Some),
            None => Ok(None),
        }
    }

    /// Flip the read flag of the book at `index`, then save.
    ///
    /// Returns the new flag, or `None` when `index` is out of range.
    pub fn toggle_read_at(&mut self, index: usize) -> Result<Option<bool>, LibraryError> {
        if index >= self.books.len() {
            return Ok(None);
        }
        self.toggle_index(index).map(Some)
    }

    /// Flip the read flag of the book with `id`, then save.
    pub fn toggle_read(&mut self, id: &BookId) -> Result<Option<bool>, LibraryError> {
        match self.position(id) {
            Some(index) => self.toggle_index(index).map(Some),
            None => Ok(None),
        }
    }

    /// All books in insertion order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    pub fn position(&self, id: &BookId) -> Option<usize> {
        self.books.iter().position(|b| &b.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The `limit` most recently added books, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Book> {
        self.books.iter().rev().take(limit).collect()
    }

    fn remove_index(&mut self, index: usize) -> Result<Book, LibraryError> {
        let book = self.books.remove(index);
        if let Err(e) = self.save() {
            warn!("Restoring '{}' after failed save", book.title);
            self.books.insert(index, book);
            return Err(e);
        }
        info!("Removed book {} ({} left)", book.id, self.books.len());
        Ok(book)
    }

    fn toggle_index(&mut self, index: usize) -> Result<bool, LibraryError> {
        let read = !self.books[index].read;
        self.books[index].read = read;
        if let Err(e) = self.save() {
            self.books[index].read = !read;
            return Err(e);
        }
        info!("Marked book {} as {}", self.books[index].id, self.books[index].status_label());
        Ok(read)
    }
}
