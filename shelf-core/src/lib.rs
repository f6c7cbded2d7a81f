//! shelf-core - book records, persistence, library store and statistics.

pub mod book;
pub mod config;
pub mod library;
pub mod library_dir;
pub mod stats;
pub mod storage;
