//! Repository trait for catalog lookups.

use crate::domain::entities::Book;
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for listing books.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// `Some(true)` keeps books with a free copy, `Some(false)` keeps fully
    /// rented books, `None` keeps everything.
    pub available: Option<bool>,
}

impl BookFilter {
    pub fn with_available(mut self, available: Option<bool>) -> Self {
        self.available = available;
        self
    }

    /// Returns true if the book passes the filter.
    pub fn matches(&self, book: &Book) -> bool {
        self.available
            .is_none_or(|available| book.is_available() == available)
    }
}

/// Read access to the book catalog.
///
/// Books are seeded at startup and only their copy counters change afterwards,
/// through [`crate::domain::repositories::RentalRepository`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLibrary`] - In-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Lists books matching the filter, ordered by title then id.
    async fn list(&self, filter: BookFilter) -> Result<Vec<Book>, AppError>;

    /// Finds a book by its catalog id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError>;

    /// Finds a book by title, ignoring case.
    ///
    /// When several books share the title, the one with the lowest id wins.
    async fn find_by_title(&self, title: &str) -> Result<Option<Book>, AppError>;

    /// Counts the books in the catalog.
    async fn count(&self) -> Result<usize, AppError>;
}
