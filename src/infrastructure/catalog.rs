//! Catalog seed loading.
//!
//! The catalog is a JSON document listing the books known to the service:
//!
//! ```json
//! {
//!   "books": [
//!     {
//!       "isbn": "9780441013593",
//!       "title": "Dune",
//!       "author": "Frank Herbert",
//!       "published_year": 1965,
//!       "total_copies": 2,
//!       "description": "Desert planet politics."
//!     }
//!   ]
//! }
//! ```
//!
//! `id` is accepted in place of `isbn`, and camelCase spellings of the numeric
//! fields are accepted too. `total_copies` defaults to 1 and
//! `available_copies` defaults to `total_copies`.

use serde::Deserialize;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::Book;

/// Errors raised while reading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Book #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("Duplicate book id: {0}")]
    DuplicateId(String),

    #[error("Book {id} has {available} available copies but only {total} in total")]
    TooManyAvailable { id: String, available: u32, total: u32 },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    books: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(alias = "id")]
    isbn: String,
    title: String,
    author: String,
    #[serde(default, alias = "publishedYear")]
    published_year: Option<i32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "totalCopies")]
    total_copies: Option<u32>,
    #[serde(default, alias = "availableCopies")]
    available_copies: Option<u32>,
}

impl CatalogEntry {
    fn into_book(self, index: usize) -> Result<Book, CatalogError> {
        let id = self.isbn.trim().to_string();
        if id.is_empty() {
            return Err(CatalogError::EmptyField { index, field: "isbn" });
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                index,
                field: "title",
            });
        }

        let total = self.total_copies.unwrap_or(1);
        let available = self.available_copies.unwrap_or(total);
        if available > total {
            return Err(CatalogError::TooManyAvailable {
                id,
                available,
                total,
            });
        }

        Ok(Book {
            id,
            title: self.title,
            author: self.author,
            published_year: self.published_year,
            description: self.description,
            total_copies: total,
            available_copies: available,
        })
    }
}

/// Parses and validates a catalog document.
///
/// # Errors
///
/// Returns [`CatalogError`] if the JSON is malformed or any entry breaks the
/// catalog rules (empty id or title, duplicate ids, more available copies
/// than total). A book with zero copies is kept and never available.
pub fn parse_catalog(json: &str) -> Result<Vec<Book>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(file.books.len());
    let mut books = Vec::with_capacity(file.books.len());

    for (index, entry) in file.books.into_iter().enumerate() {
        let book = entry.into_book(index)?;
        if !seen.insert(book.id.clone()) {
            return Err(CatalogError::DuplicateId(book.id));
        }
        books.push(book);
    }

    Ok(books)
}

/// Reads and validates the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<Book>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&json)
}

/// Reads the catalog at `path`, treating a missing file as an empty catalog.
///
/// Any other failure (permissions, malformed JSON, invalid entries) is still
/// an error.
pub fn load_catalog_or_empty(path: &Path) -> Result<Vec<Book>, CatalogError> {
    match load_catalog(path) {
        Err(CatalogError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Catalog file not found, starting with an empty catalog");
            Ok(Vec::new())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BookStatus;
    use std::io::Write;

    #[test]
    fn test_parse_full_entry() {
        let json = r#"{"books": [{
            "isbn": "9780441013593",
            "title": "Dune",
            "author": "Frank Herbert",
            "published_year": 1965,
            "total_copies": 3,
            "available_copies": 2,
            "description": "Spice."
        }]}"#;

        let books = parse_catalog(json).unwrap();
        assert_eq!(books.len(), 1);

        let dune = &books[0];
        assert_eq!(dune.id, "9780441013593");
        assert_eq!(dune.published_year, Some(1965));
        assert_eq!(dune.total_copies, 3);
        assert_eq!(dune.available_copies, 2);
        assert_eq!(dune.description.as_deref(), Some("Spice."));
    }

    #[test]
    fn test_defaults_and_aliases() {
        let json = r#"{"books": [
            {"id": "a", "title": "A", "author": "X"},
            {"isbn": "b", "title": "B", "author": "Y", "totalCopies": 4, "publishedYear": 2001}
        ]}"#;

        let books = parse_catalog(json).unwrap();

        assert_eq!(books[0].id, "a");
        assert_eq!(books[0].total_copies, 1);
        assert_eq!(books[0].available_copies, 1);

        assert_eq!(books[1].total_copies, 4);
        assert_eq!(books[1].available_copies, 4);
        assert_eq!(books[1].published_year, Some(2001));
    }

    #[test]
    fn test_zero_copies_is_listed_but_never_available() {
        let json = r#"{"books": [{"isbn": "a", "title": "A", "author": "X", "total_copies": 0}]}"#;

        let books = parse_catalog(json).unwrap();

        assert_eq!(books[0].total_copies, 0);
        assert_eq!(books[0].available_copies, 0);
        assert_eq!(books[0].status(), BookStatus::Rented);
    }

    #[test]
    fn test_missing_books_key_is_empty_catalog() {
        assert!(parse_catalog("{}").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{"books": [
            {"isbn": "a", "title": "A", "author": "X"},
            {"isbn": "a", "title": "A again", "author": "X"}
        ]}"#;

        assert!(matches!(
            parse_catalog(json),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_rejects_invalid_entries() {
        let too_many = r#"{"books": [{"isbn": "a", "title": "A", "author": "X",
            "total_copies": 1, "available_copies": 2}]}"#;
        assert!(matches!(
            parse_catalog(too_many),
            Err(CatalogError::TooManyAvailable { available: 2, total: 1, .. })
        ));

        let blank = r#"{"books": [{"isbn": "  ", "title": "A", "author": "X"}]}"#;
        assert!(matches!(
            parse_catalog(blank),
            Err(CatalogError::EmptyField { index: 0, field: "isbn" })
        ));

        let missing_author = r#"{"books": [{"isbn": "a", "title": "A"}]}"#;
        assert!(matches!(
            parse_catalog(missing_author),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"books": [{{"isbn": "a", "title": "A", "author": "X"}}]}}"#
        )
        .unwrap();

        let books = load_catalog(file.path()).unwrap();
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(load_catalog(&path), Err(CatalogError::Io { .. })));
        assert!(load_catalog_or_empty(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_not_treated_as_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(load_catalog_or_empty(file.path()).is_err());
    }
}
