//! Top-level application state
//!
//! Owns the library and every screen's sub-state. Handlers receive this
//! object explicitly; nothing lives in globals.

use super::add::AddForm;
use super::list::ListState;
use super::remove::RemoveState;
use super::search::SearchState;
use super::ui::{Flash, Screen};
use shelf_core::config::Config;
use shelf_core::library::{LibraryError, LibraryManager, LoadOutcome};
use shelf_core::stats::LibraryStats;
use shelf_core::storage::{BookFile, StorageError};
use tracing::{debug, info, warn};

/// Timestamp format for the "Last saved" footer
pub const LAST_SAVED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug)]
pub struct AppState {
    pub library: LibraryManager,
    pub config: Config,
    pub screen: Screen,
    pub list: ListState,
    pub add: AddForm,
    pub search: SearchState,
    pub remove: RemoveState,
    /// Result of the last action, cleared on navigation
    pub flash: Option<Flash>,
    pub should_quit: bool,
}

impl AppState {
    /// Build the app state and load the library from its backing file.
    ///
    /// A missing file starts an empty library; an unreadable one is reported
    /// in the status line and also starts empty.
    pub fn new(config: Config) -> Self {
        let library = LibraryManager::new(BookFile::new(config.library_dir.books_path()));
        let add = AddForm::new(config.default_year, &config.default_genre);
        let mut state = Self {
            library,
            config,
            screen: Screen::default(),
            list: ListState::default(),
            add,
            search: SearchState::default(),
            remove: RemoveState::default(),
            flash: None,
            should_quit: false,
        };

        match state.library.load() {
            Ok(LoadOutcome::Loaded(count)) => info!("Session started with {count} books"),
            Ok(LoadOutcome::NotFound) => info!("Session started with an empty library"),
            Err(e) => {
                warn!("Failed to load library at startup: {e}");
                state.flash = Some(Flash::error(state.quarantine_unreadable(&e)));
            }
        }
        state
    }

    pub fn navigate(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        debug!("Navigate {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        self.flash = None;
        self.remove.cancel();
        self.after_library_change();
    }

    /// Manual reload from disk.
    pub fn load_library(&mut self) {
        self.flash = Some(match self.library.load() {
            Ok(LoadOutcome::Loaded(_)) => {
                self.list.reset_filters();
                self.search.selected = 0;
                self.remove = RemoveState::default();
                Flash::success("Library loaded successfully!")
            }
            Ok(LoadOutcome::NotFound) => Flash::info("No library file found."),
            Err(e) => Flash::error(format!("Error loading library: {e}")),
        });
    }

    /// Manual save of the current library.
    pub fn save_library(&mut self) {
        self.flash = Some(match self.library.save() {
            Ok(()) => Flash::success("Library saved successfully!"),
            Err(e) => Flash::error(format!("Error saving library: {e}")),
        });
    }

    pub fn submit_add_form(&mut self) {
        self.flash = Some(self.add.submit(&mut self.library));
        self.after_library_change();
    }

    pub fn remove_list_selection(&mut self) {
        if let Some(flash) = self.list.remove_selected(&mut self.library) {
            self.flash = Some(flash);
        }
        self.after_library_change();
    }

    pub fn toggle_search_selection(&mut self) {
        if let Some(flash) = self.search.toggle_selected(&mut self.library) {
            self.flash = Some(flash);
        }
    }

    pub fn confirm_removal(&mut self) {
        if let Some(flash) = self.remove.confirm(&mut self.library) {
            self.flash = Some(flash);
        }
        self.after_library_change();
    }

    /// Stats over the current library, recomputed on every call.
    pub fn stats(&self) -> LibraryStats {
        LibraryStats::compute(self.library.all())
    }

    pub fn last_saved_label(&self) -> Option<String> {
        self.library
            .last_saved()
            .map(|t| t.format(LAST_SAVED_FORMAT).to_string())
    }

    /// Move a file that failed to parse out of the way so the first save of
    /// this session can't replace it. Returns the status message.
    fn quarantine_unreadable(&self, error: &LibraryError) -> String {
        if !matches!(error, LibraryError::Storage(StorageError::Parse(_))) {
            return format!("Error loading library: {error}");
        }
        match self.library.file().quarantine() {
            Ok(moved) => format!(
                "Error loading library: {error}. The file was moved to {}",
                moved.display()
            ),
            Err(e) => {
                warn!("Failed to move unreadable library aside: {e}");
                format!("Error loading library: {error}")
            }
        }
    }

    fn after_library_change(&mut self) {
        let books = self.library.all();
        self.list.clamp(books);
        self.remove.clamp(books);
    }
}
