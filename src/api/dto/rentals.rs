//! DTOs for rent and return endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::books::BookDetail;
use crate::application::services::RentalWithBook;
use crate::domain::entities::{Rental, RentalStatus};
use crate::utils::identifiers::USER_ID_REGEX;

/// `?user_id=` query parameter identifying the acting user.
#[derive(Debug, Deserialize, Validate)]
pub struct UserQuery {
    #[validate(regex(path = *USER_ID_REGEX, message = "User id must be 1-64 of A-Z, a-z, 0-9, _ . @ -"))]
    pub user_id: String,
}

/// JSON representation of a rental.
#[derive(Debug, Clone, Serialize)]
pub struct RentalView {
    pub id: Uuid,
    pub book_id: String,
    pub user_id: String,
    pub status: RentalStatus,
    pub rented_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl From<Rental> for RentalView {
    fn from(rental: Rental) -> Self {
        Self {
            status: rental.status(),
            id: rental.id,
            book_id: rental.book_id,
            user_id: rental.user_id,
            rented_at: rental.rented_at,
            returned_at: rental.returned_at,
        }
    }
}

/// Response for both `rent` and `return`.
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub message: &'static str,
    pub rental_id: Uuid,
    pub rental: RentalView,
    pub book: BookDetail,
}

impl RentalResponse {
    pub fn new(message: &'static str, item: RentalWithBook) -> Self {
        Self {
            message,
            rental_id: item.rental.id,
            rental: item.rental.into(),
            book: item.book.into(),
        }
    }
}
