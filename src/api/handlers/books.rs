//! Handlers for catalog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::api::dto::books::{BookDetailResponse, BookListQuery, BookListResponse, BookSummary};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::identifiers::validate_book_key;

/// Lists the catalog.
///
/// # Endpoint
///
/// `GET /v1/books`
///
/// # Query Parameters
///
/// - `available` (optional): `true` for books with a free copy, `false` for
///   fully rented books
///
/// # Response
///
/// ```json
/// {
///   "books": [
///     { "id": "9780441013593", "title": "Dune", "author": "Frank Herbert",
///       "status": "available", "available_copies": 2 }
///   ]
/// }
/// ```
pub async fn list_books_handler(
    State(state): State<AppState>,
    query: Result<Query<BookListQuery>, QueryRejection>,
) -> Result<Json<BookListResponse>, AppError> {
    let Query(params) = query?;

    let books = state.catalog_service.list_books(params.to_filter()).await?;

    Ok(Json(BookListResponse {
        books: books.iter().map(BookSummary::from).collect(),
    }))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /v1/books/{book_id}`
///
/// `book_id` is matched against catalog ids first, then against titles
/// ignoring case.
///
/// # Errors
///
/// Returns 404 Not Found if no book matches.
pub async fn book_details_handler(
    Path(book_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookDetailResponse>, AppError> {
    validate_book_key(&book_id)?;

    let book = state.catalog_service.get_book(&book_id).await?;

    Ok(Json(BookDetailResponse { book: book.into() }))
}
