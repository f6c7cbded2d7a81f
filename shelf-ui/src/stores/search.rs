//! Title/author search state

use super::ui::Flash;
use shelf_core::book::Book;
use shelf_core::library::{search, LibraryManager};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Index into the current results
    pub selected: usize,
}

impl SearchState {
    pub fn results<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        search(books, &self.query)
    }

    pub fn selected_book<'a>(&self, books: &'a [Book]) -> Option<&'a Book> {
        let results = self.results(books);
        let index = self.selected.min(results.len().saturating_sub(1));
        results.get(index).copied()
    }

    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    pub fn select_next(&mut self, books: &[Book]) {
        if self.selected + 1 < self.results(books).len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Header line for the result list, `None` while the query is blank.
    pub fn summary(&self, books: &[Book]) -> Option<String> {
        if self.query.trim().is_empty() {
            return None;
        }
        let count = self.results(books).len();
        Some(if count == 0 {
            format!("No books found matching '{}'", self.query)
        } else {
            format!("Found {} books matching '{}'", count, self.query)
        })
    }

    /// Flip read status of the highlighted result.
    pub fn toggle_selected(&mut self, library: &mut LibraryManager) -> Option<Flash> {
        let book = self.selected_book(library.all())?;
        let (id, title) = (book.id.clone(), book.title.clone());

        match library.toggle_read(&id) {
            Ok(Some(_)) => Some(Flash::success(format!(
                "Updated reading status for '{title}'!"
            ))),
            Ok(None) => None,
            Err(e) => Some(Flash::error(format!("Error saving library: {e}"))),
        }
    }
}
