use std::ops::Deref;
use std::path::{Path, PathBuf};

/// A library directory and the files it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryDir {
    path: PathBuf,
}

impl LibraryDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file holding every book as one JSON array.
    pub fn books_path(&self) -> PathBuf {
        self.path.join("library.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path.join("config.yaml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.path.join("shelf.log")
    }

    pub fn crash_log_path(&self) -> PathBuf {
        self.path.join("crash.log")
    }
}

impl Deref for LibraryDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for LibraryDir {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for LibraryDir {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}
