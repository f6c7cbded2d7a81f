//! Library list state: filters and selection

use super::ui::Flash;
use shelf_common::ReadFilter;
use shelf_core::book::Book;
use shelf_core::library::{genre_options, BookFilter, LibraryManager};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub filter: BookFilter,
    /// Index into the filtered rows
    pub selected: usize,
}

impl ListState {
    /// Books passing the current filters, in library order
    pub fn visible<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        self.filter.apply(books)
    }

    pub fn selected_book<'a>(&self, books: &'a [Book]) -> Option<&'a Book> {
        let visible = self.visible(books);
        let index = self.selected.min(visible.len().saturating_sub(1));
        visible.get(index).copied()
    }

    pub fn genre_label(&self) -> &str {
        self.filter.genre.as_deref().unwrap_or("All")
    }

    /// Step through "All" followed by every genre present, sorted.
    pub fn cycle_genre(&mut self, books: &[Book]) {
        let options = genre_options(books);
        let next = match &self.filter.genre {
            None => options.first().cloned(),
            Some(current) => options
                .iter()
                .position(|g| g == current)
                .and_then(|i| options.get(i + 1).cloned()),
        };
        debug!("List genre filter: {:?}", next);
        self.filter.genre = next;
        self.selected = 0;
    }

    pub fn cycle_status(&mut self) {
        self.filter.status = self.filter.status.next();
        self.selected = 0;
    }

    pub fn select_next(&mut self, books: &[Book]) {
        let count = self.visible(books).len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep filters and selection valid after the library changed.
    pub fn clamp(&mut self, books: &[Book]) {
        if let Some(genre) = &self.filter.genre {
            if !books.iter().any(|b| &b.genre == genre) {
                self.filter.genre = None;
            }
        }
        let count = self.visible(books).len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn reset_filters(&mut self) {
        self.filter = BookFilter {
            genre: None,
            status: ReadFilter::All,
        };
        self.selected = 0;
    }

    /// Remove the highlighted row.
    pub fn remove_selected(&mut self, library: &mut LibraryManager) -> Option<Flash> {
        let book = self.selected_book(library.all())?;
        let (id, title) = (book.id.clone(), book.title.clone());

        let flash = match library.remove(&id) {
            Ok(Some(_)) => Flash::success(format!("Removed '{title}' from your library!")),
            Ok(None) => return None,
            Err(e) => Flash::error(format!("Error saving library: {e}")),
        };
        self.clamp(library.all());
        Some(flash)
    }
}
