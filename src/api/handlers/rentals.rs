//! Handlers for renting and returning books.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::rentals::{RentalResponse, UserQuery};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::identifiers::{parse_rental_id, validate_book_key};

/// Rents a copy of a book.
///
/// # Endpoint
///
/// `POST /v1/books/{book_name}/rent?user_id={user_id}`
///
/// The book may be referenced by id or by title.
///
/// # Response
///
/// ```json
/// {
///   "message": "Book rented successfully",
///   "rental_id": "1f0c...",
///   "rental": { "id": "1f0c...", "book_id": "9780441013593", "user_id": "alice",
///               "status": "active", "rented_at": "...", "returned_at": null },
///   "book": { "id": "9780441013593", "status": "rented", ... }
/// }
/// ```
///
/// # Errors
///
/// - 400 if `user_id` is missing or malformed
/// - 404 if the book is unknown
/// - 409 if no copy is free or the user already holds this book
pub async fn rent_book_handler(
    Path(book_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<RentalResponse>, AppError> {
    let Query(params) = query?;
    params.validate()?;
    validate_book_key(&book_name)?;

    let rented = state
        .rental_service
        .rent_book(&book_name, &params.user_id)
        .await?;

    Ok(Json(RentalResponse::new("Book rented successfully", rented)))
}

/// Returns a rented book.
///
/// # Endpoint
///
/// `POST /v1/rentals/{rental_id}/return?user_id={user_id}`
///
/// # Errors
///
/// - 400 if `user_id` is missing or malformed, or `rental_id` is not a UUID
/// - 403 if the rental belongs to another user
/// - 404 if the rental is unknown
/// - 409 if the rental was already returned
pub async fn return_book_handler(
    Path(rental_id): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<RentalResponse>, AppError> {
    let Query(params) = query?;
    params.validate()?;
    let rental_id = parse_rental_id(&rental_id)?;

    let returned = state
        .rental_service
        .return_book(rental_id, &params.user_id)
        .await?;

    Ok(Json(RentalResponse::new("Book returned successfully", returned)))
}
