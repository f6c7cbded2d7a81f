//! Whole-library JSON persistence
//!
//! The library lives in a single file holding one JSON array of books, in
//! library order. Every save rewrites the whole array. Writes go to a
//! sibling temp file which is then renamed over the target, so a crash
//! mid-write never leaves a truncated library behind.

use crate::book::{Book, BookId};
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse library file: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Failed to serialize library: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// The backing file for a library
#[derive(Clone, Debug)]
pub struct BookFile {
    path: PathBuf,
}

impl BookFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every book from disk.
    ///
    /// Returns `Ok(None)` when the file does not exist yet. Unreadable or
    /// malformed content is an error, never an empty library.
    pub fn load(&self) -> Result<Option<Vec<Book>>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No library file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut books: Vec<Book> =
            serde_json::from_str(&contents).map_err(StorageError::Parse)?;
        repair_ids(&mut books);
        info!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(Some(books))
    }

    /// Replace the file with `books`, returning when the save happened.
    pub fn save(&self, books: &[Book]) -> Result<DateTime<Local>, StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(books).map_err(StorageError::Serialize)?;
        let temp_path = self.temp_path();

        if let Err(e) = write_and_rename(&temp_path, &self.path, json.as_bytes()) {
            warn!("Failed to save library to {}: {}", self.path.display(), e);
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", temp_path.display(), cleanup);
                }
            }
            return Err(e.into());
        }

        info!("Saved {} books to {}", books.len(), self.path.display());
        Ok(Local::now())
    }

    /// Move an unreadable file aside to `<name>.corrupt` so later saves can't overwrite it.
    ///
    /// Returns the new location.
    pub fn quarantine(&self) -> Result<PathBuf, StorageError> {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "library.json".into());
        name.push(".corrupt");
        let target = self.path.with_file_name(name);
        fs::rename(&self.path, &target)?;
        warn!(
            "Moved unreadable library {} to {}",
            self.path.display(),
            target.display()
        );
        Ok(target)
    }

    /// `.library.json.tmp` next to the backing file, so the rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "library.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

/// Give every book with a blank or repeated id a fresh one.
///
/// Hand-edited files can carry duplicates; lookups by id must hit exactly one book.
fn repair_ids(books: &mut [Book]) {
    let mut seen = HashSet::new();
    for book in books.iter_mut() {
        if book.id.as_str().trim().is_empty() || !seen.insert(book.id.clone()) {
            let fresh = BookId::new();
            warn!(
                "Book '{}' had a blank or duplicate id '{}', assigning {}",
                book.title, book.id, fresh
            );
            book.id = fresh;
            seen.insert(book.id.clone());
        }
    }
}

fn write_and_rename(temp_path: &Path, target: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookId;
    use tempfile::TempDir;

    fn book(id: &str, title: &str, read: bool) -> Book {
        Book {
            id: BookId::from(id),
            title: title.to_string(),
            author: "Author".to_string(),
            year: 2000,
            genre: "Fiction".to_string(),
            read,
        }
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let file = BookFile::new(temp.path().join("library.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let file = BookFile::new(temp.path().join("library.json"));
        let books = vec![book("a", "First", false), book("b", "Second", true)];

        file.save(&books).unwrap();

        assert_eq!(file.load().unwrap(), Some(books));
    }

    #[test]
    fn test_save_empty_writes_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        BookFile::new(&path).save(&[]).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[test]
    fn test_save_creates_parent_dir_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("library.json");
        let file = BookFile::new(&path);

        file.save(&[book("a", "Only", false)]).unwrap();

        assert!(path.exists());
        let names: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("library.json")]);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();

        let err = BookFile::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        fs::write(&path, r#"{"title": "not an array"}"#).unwrap();

        assert!(matches!(
            BookFile::new(&path).load(),
            Err(StorageError::Parse(_))
        ));
    }

    #[test]
    fn test_load_replaces_blank_and_duplicate_ids() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        let books = vec![
            book("x", "A", false),
            book("x", "B", false),
            book("", "C", false),
            book("y", "D", false),
        ];
        fs::write(&path, serde_json::to_string(&books).unwrap()).unwrap();

        let loaded = BookFile::new(&path).load().unwrap().unwrap();

        assert_eq!(loaded[0].id, BookId::from("x"));
        assert_eq!(loaded[3].id, BookId::from("y"));
        assert!(!loaded[2].id.as_str().is_empty());
        let ids: HashSet<_> = loaded.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_quarantine_moves_file_aside() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("library.json");
        fs::write(&path, "[{]").unwrap();
        let file = BookFile::new(&path);

        let moved = file.quarantine().unwrap();

        assert_eq!(moved, temp.path().join("library.json.corrupt"));
        assert_eq!(fs::read_to_string(&moved).unwrap(), "[{]");
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_failed_save_cleans_up_temp_file() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = temp.path().join("library.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = BookFile::new(&path).save(&[book("a", "A", false)]);
        assert!(matches!(err, Err(StorageError::Io(_))));
        assert!(!temp.path().join(".library.json.tmp").exists());
        assert!(path.join("keep").exists());
    }
}
