//! Catalog browsing service.

use crate::domain::entities::Book;
use crate::domain::repositories::{BookFilter, BookRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Read-side service for the book catalog.
pub struct CatalogService<B: BookRepository> {
    repository: Arc<B>,
}

impl<B: BookRepository> CatalogService<B> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<B>) -> Self {
        Self { repository }
    }

    /// Lists books matching the filter, ordered by title.
    pub async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, AppError> {
        self.repository.list(filter).await
    }

    /// Resolves a book reference to a catalog entry.
    ///
    /// The key is tried as a book id first, then as a case-insensitive title,
    /// so both `/books/9780441013593` and `/books/Dune` work.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if neither lookup matches.
    pub async fn get_book(&self, key: &str) -> Result<Book, AppError> {
        resolve_book(self.repository.as_ref(), key).await
    }

    /// Number of books in the catalog.
    pub async fn count_books(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

/// Looks a book up by id, then by case-insensitive title.
pub(crate) async fn resolve_book<B: BookRepository>(
    repository: &B,
    key: &str,
) -> Result<Book, AppError> {
    if let Some(book) = repository.find_by_id(key).await? {
        return Ok(book);
    }

    repository
        .find_by_title(key)
        .await?
        .ok_or_else(|| AppError::not_found("Book was not found", json!({ "book_id": key })))
}
