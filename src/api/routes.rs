//! API route configuration for the `/v1` surface.

use crate::api::handlers::{
    book_details_handler, list_books_handler, rent_book_handler, return_book_handler,
    user_books_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only catalog and history routes.
///
/// # Endpoints
///
/// - `GET /books`                 - List books
/// - `GET /books/{book_id}`       - Book details (by id or title)
/// - `GET /users/{user_id}/books` - A user's rentals
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler))
        .route("/books/{book_id}", get(book_details_handler))
        .route("/users/{user_id}/books", get(user_books_handler))
}

/// State-changing routes, subject to rate limiting.
///
/// # Endpoints
///
/// - `POST /books/{book_id}/rent?user_id=`      - Rent a book (by id or title)
/// - `POST /rentals/{rental_id}/return?user_id=` - Return a rental
pub fn rental_routes() -> Router<AppState> {
    Router::new()
        .route("/books/{book_id}/rent", post(rent_book_handler))
        .route("/rentals/{rental_id}/return", post(return_book_handler))
}
