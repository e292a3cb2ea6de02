//! Handler for a user's rental history.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::users::{UserBooksQuery, UserBooksResponse, UserPath, UserRentalItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the books a user has rented.
///
/// # Endpoint
///
/// `GET /v1/users/{user_id}/books`
///
/// # Query Parameters
///
/// - `status` (optional): `active`, `returned` or `all` (default)
///
/// Rentals are returned newest first. A user without rentals gets an empty
/// list rather than 404, since users have no stored profile.
pub async fn user_books_handler(
    Path(path): Path<UserPath>,
    State(state): State<AppState>,
    query: Result<Query<UserBooksQuery>, QueryRejection>,
) -> Result<Json<UserBooksResponse>, AppError> {
    let Query(params) = query?;
    path.validate()?;
    let user_id = path.user_id;

    let rentals = state
        .rental_service
        .list_user_rentals(&user_id, params.status.as_status())
        .await?;

    Ok(Json(UserBooksResponse {
        user_id,
        books: rentals.into_iter().map(UserRentalItem::from).collect(),
    }))
}
