use shelf_core::book::NewBook;
use shelf_core::library::{search, BookFilter, LibraryManager, LoadOutcome};
use shelf_core::library_dir::LibraryDir;
use shelf_core::stats::LibraryStats;
use shelf_core::storage::BookFile;
use tempfile::TempDir;

fn setup_library() -> (LibraryManager, LibraryDir, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let library_dir = LibraryDir::new(temp_dir.path());
    let library = LibraryManager::new(BookFile::new(library_dir.books_path()));
    (library, library_dir, temp_dir)
}

fn read_file_json(library_dir: &LibraryDir) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(library_dir.books_path()).unwrap()).unwrap()
}

#[test]
fn test_add_then_remove_leaves_empty_array_on_disk() {
    let (mut library, library_dir, _dir) = setup_library();

    library
        .add(NewBook::new("1984", "Orwell", 1949, "Fiction", false))
        .unwrap();
    assert_eq!(read_file_json(&library_dir).as_array().unwrap().len(), 1);

    assert!(library.remove_at(0).unwrap());

    assert_eq!(library.len(), 0);
    assert_eq!(read_file_json(&library_dir), serde_json::json!([]));
}

#[test]
fn test_length_is_adds_minus_valid_removes() {
    let (mut library, _library_dir, _dir) = setup_library();

    for i in 0..7 {
        library
            .add(NewBook::new(
                format!("Book {i}"),
                "Author",
                2000 + i,
                "Fiction",
                i % 2 == 0,
            ))
            .unwrap();
    }

    let mut removed = 0;
    for index in [0, 10, 2, 4, 99] {
        if library.remove_at(index).unwrap() {
            removed += 1;
        }
    }

    assert_eq!(removed, 3);
    assert_eq!(library.len(), 7 - removed);
}

#[test]
fn test_reopen_restores_same_books_in_order() {
    let (mut library, library_dir, _dir) = setup_library();
    library
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
        .unwrap();
    library
        .add(NewBook::new("It", "Stephen King", 1986, "Horror", false))
        .unwrap();
    library
        .add(NewBook::new("It", "Stephen King", 1986, "Horror", false))
        .unwrap();

    let reopened = LibraryManager::open(BookFile::new(library_dir.books_path())).unwrap();

    assert_eq!(reopened.all(), library.all());
}

#[test]
fn test_toggle_read_persists_only_that_book() {
    let (mut library, library_dir, _dir) = setup_library();
    let first = library
        .add(NewBook::new("Emma", "Jane Austen", 1815, "Romance", false))
        .unwrap();
    let second = library
        .add(NewBook::new("Persuasion", "Jane Austen", 1817, "Romance", false))
        .unwrap();

    assert_eq!(library.toggle_read(&second).unwrap(), Some(true));

    let mut reloaded = LibraryManager::new(BookFile::new(library_dir.books_path()));
    assert_eq!(reloaded.load().unwrap(), LoadOutcome::Loaded(2));
    assert!(!reloaded.get(&first).unwrap().read);
    assert!(reloaded.get(&second).unwrap().read);
}

#[test]
fn test_open_without_file_is_empty() {
    let (_library, library_dir, _dir) = setup_library();
    let library = LibraryManager::open(BookFile::new(library_dir.books_path())).unwrap();

    assert!(library.is_empty());
    assert!(library.last_saved().is_none());
    let stats = LibraryStats::compute(library.all());
    assert_eq!(stats, LibraryStats::default());
}

#[test]
fn test_legacy_file_without_ids_loads() {
    let (_library, library_dir, _dir) = setup_library();
    std::fs::write(
        library_dir.books_path(),
        r#"[{"title": "Dune", "author": "Frank Herbert", "year": 1965, "genre": "Science Fiction", "read": true},
            {"title": "Dune", "author": "Frank Herbert", "year": 1965, "genre": "Science Fiction", "read": true}]"#,
    )
    .unwrap();

    let mut library = LibraryManager::open(BookFile::new(library_dir.books_path())).unwrap();
    assert_eq!(library.len(), 2);
    let first = library.all()[0].id.clone();
    assert_ne!(first, library.all()[1].id);

    // Identical records are still separately addressable.
    library.remove(&first).unwrap();
    assert_eq!(library.len(), 1);
    let saved = read_file_json(&library_dir);
    assert!(saved[0]["id"].is_string());
}

#[test]
fn test_queries_and_stats_over_saved_library() {
    let (mut library, _library_dir, _dir) = setup_library();
    library
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Science Fiction", true))
        .unwrap();
    library
        .add(NewBook::new("It", "Stephen King", 1986, "Horror", false))
        .unwrap();
    library
        .add(NewBook::new("Misery", "Stephen King", 1987, "Horror", true))
        .unwrap();

    let hits = search(library.all(), "KING");
    assert_eq!(hits.len(), 2);

    let horror = BookFilter {
        genre: Some("Horror".to_string()),
        ..Default::default()
    };
    assert_eq!(horror.apply(library.all()).len(), 2);

    let stats = LibraryStats::compute(library.all());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.read, 2);
    assert_eq!(stats.unread, 1);
    assert_eq!(stats.top_genres(10)[0].genre, "Horror");
}

#[test]
fn test_shared_ids_in_file_are_addressed_separately() {
    let (_library, library_dir, _dir) = setup_library();
    std::fs::write(
        library_dir.books_path(),
        r#"[{"id": "x", "title": "A", "author": "Anon", "year": 2000, "genre": "Fiction", "read": false},
            {"id": "x", "title": "B", "author": "Anon", "year": 2000, "genre": "Fiction", "read": false}]"#,
    )
    .unwrap();

    let mut library = LibraryManager::open(BookFile::new(library_dir.books_path())).unwrap();
    let second = library.all()[1].id.clone();
    assert_ne!(library.all()[0].id, second);

    assert_eq!(library.toggle_read(&second).unwrap(), Some(true));
    assert!(!library.all()[0].read);
    assert!(library.all()[1].read);

    let removed = library.remove(&second).unwrap().unwrap();
    assert_eq!(removed.title, "B");
    assert_eq!(library.len(), 1);
    assert_eq!(library.all()[0].title, "A");

    // The repaired ids were written back
    let saved = read_file_json(&library_dir);
    assert_eq!(saved[0]["id"], "x");
}
