//! DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{Book, BookStatus};
use crate::domain::repositories::BookFilter;

/// Query parameters for `GET /v1/books`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BookListQuery {
    /// `true` keeps books with a free copy, `false` keeps fully rented ones.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub available: Option<bool>,
}

impl BookListQuery {
    pub fn to_filter(&self) -> BookFilter {
        BookFilter::default().with_available(self.available)
    }
}

/// Short form of a book used in listings.
#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub available_copies: u32,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            status: book.status(),
            available_copies: book.available_copies,
        }
    }
}

/// Full book representation.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub available_copies: u32,
    pub total_copies: u32,
    pub published_year: Option<i32>,
    pub description: Option<String>,
}

impl From<Book> for BookDetail {
    fn from(book: Book) -> Self {
        Self {
            status: book.status(),
            id: book.id,
            title: book.title,
            author: book.author,
            available_copies: book.available_copies,
            total_copies: book.total_copies,
            published_year: book.published_year,
            description: book.description,
        }
    }
}

/// Response for `GET /v1/books`.
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub books: Vec<BookSummary>,
}

/// Response for `GET /v1/books/{book_id}`.
#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    pub book: BookDetail,
}
