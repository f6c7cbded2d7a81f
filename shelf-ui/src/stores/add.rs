//! Add-book form state

use super::ui::Flash;
use shelf_common::{genre_position, GENRES};
use shelf_core::book::{current_year, NewBook, MIN_YEAR};
use shelf_core::library::{LibraryError, LibraryManager};

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Title,
    Author,
    Year,
    Genre,
    Read,
}

impl AddField {
    const ORDER: [AddField; 5] = [
        AddField::Title,
        AddField::Author,
        AddField::Year,
        AddField::Genre,
        AddField::Read,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> AddField {
        Self::ORDER[(self.position() + 1).min(Self::ORDER.len() - 1)]
    }

    pub fn previous(self) -> AddField {
        Self::ORDER[self.position().saturating_sub(1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            AddField::Title => "Title",
            AddField::Author => "Author",
            AddField::Year => "Publication Year",
            AddField::Genre => "Genre",
            AddField::Read => "I've read this book",
        }
    }
}

/// The add form. Genre is always a listed value; year is clamped on focus change and submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Index into [`GENRES`]
    pub genre_index: usize,
    pub read: bool,
    pub focus: AddField,
    default_year: i32,
    default_genre_index: usize,
}

impl AddForm {
    pub fn new(default_year: i32, default_genre: &str) -> Self {
        let default_genre_index = genre_position(default_genre).unwrap_or(0);
        Self {
            title: String::new(),
            author: String::new(),
            year: default_year,
            genre_index: default_genre_index,
            read: false,
            focus: AddField::Title,
            default_year,
            default_genre_index,
        }
    }

    pub fn genre(&self) -> &'static str {
        GENRES[self.genre_index]
    }

    pub fn focus_next(&mut self) {
        self.year = clamp_year(self.year);
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.year = clamp_year(self.year);
        self.focus = self.focus.previous();
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            AddField::Title => self.title.push(c),
            AddField::Author => self.author.push(c),
            AddField::Year => {
                if let Some(digit) = c.to_digit(10) {
                    self.type_year_digit(digit as i32);
                }
            }
            AddField::Read if c == ' ' => self.read = !self.read,
            AddField::Genre | AddField::Read => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            AddField::Title => {
                self.title.pop();
            }
            AddField::Author => {
                self.author.pop();
            }
            AddField::Year => self.year /= 10,
            AddField::Genre | AddField::Read => {}
        }
    }

    /// Left/right on the focused field: step year, cycle genre, flip the checkbox.
    pub fn adjust(&mut self, delta: i32) {
        match self.focus {
            AddField::Year => self.year = clamp_year(self.year + delta),
            AddField::Genre => {
                let len = GENRES.len() as i32;
                self.genre_index = (self.genre_index as i32 + delta).rem_euclid(len) as usize;
            }
            AddField::Read => self.read = !self.read,
            AddField::Title | AddField::Author => {}
        }
    }

    /// Shift the typed digit in from the right, keeping at most four digits.
    /// The value is clamped once focus leaves the field.
    fn type_year_digit(&mut self, digit: i32) {
        self.year = (self.year % 1000) * 10 + digit;
    }

    pub fn draft(&self) -> NewBook {
        NewBook::new(
            self.title.clone(),
            self.author.clone(),
            clamp_year(self.year),
            self.genre(),
            self.read,
        )
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.default_year, GENRES[self.default_genre_index]);
    }

    /// Add the drafted book. Clears the form on success; keeps it on failure.
    pub fn submit(&mut self, library: &mut LibraryManager) -> Flash {
        let draft = self.draft();
        match library.add(draft) {
            Ok(_) => {
                let flash = Flash::success(format!(
                    "'{}' by {} has been added to your library!",
                    self.title.trim(),
                    self.author.trim()
                ));
                self.reset();
                flash
            }
            Err(LibraryError::Validation(e)) => Flash::error(e.to_string()),
            Err(e) => Flash::error(format!("Error saving library: {e}")),
        }
    }
}

fn clamp_year(year: i32) -> i32 {
    year.clamp(MIN_YEAR, current_year())
}
