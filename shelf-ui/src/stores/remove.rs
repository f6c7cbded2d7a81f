//! Remove screen state: pick a book, review it, confirm

use super::ui::Flash;
use shelf_core::book::Book;
use shelf_core::library::LibraryManager;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveState {
    /// Index into the whole library
    pub selected: usize,
    /// Waiting for y/n on the selected book
    pub confirming: bool,
}

impl RemoveState {
    pub fn selected_book<'a>(&self, books: &'a [Book]) -> Option<&'a Book> {
        books.get(self.selected.min(books.len().saturating_sub(1)))
    }

    pub fn select_next(&mut self, books: &[Book]) {
        if self.selected + 1 < books.len() {
            self.selected += 1;
        }
        self.confirming = false;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.confirming = false;
    }

    /// Ask for confirmation. Does nothing on an empty library.
    pub fn request_confirmation(&mut self, books: &[Book]) {
        self.confirming = !books.is_empty();
    }

    pub fn cancel(&mut self) {
        self.confirming = false;
    }

    /// Remove the selected book once confirmed.
    pub fn confirm(&mut self, library: &mut LibraryManager) -> Option<Flash> {
        if !self.confirming {
            return None;
        }
        self.confirming = false;

        let book = self.selected_book(library.all())?;
        let (id, title) = (book.id.clone(), book.title.clone());

        let flash = match library.remove(&id) {
            Ok(Some(_)) => Flash::success(format!("'{title}' has been removed from your library!")),
            Ok(None) => return None,
            Err(e) => Flash::error(format!("Error saving library: {e}")),
        };
        self.clamp(library.all());
        Some(flash)
    }

    pub fn clamp(&mut self, books: &[Book]) {
        self.selected = self.selected.min(books.len().saturating_sub(1));
    }
}
