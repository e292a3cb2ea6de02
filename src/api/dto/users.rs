//! DTOs for the user rentals endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::services::RentalWithBook;
use crate::domain::entities::RentalStatus;
use crate::utils::identifiers::USER_ID_REGEX;

/// `{user_id}` path segment of the user rentals endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPath {
    #[validate(regex(path = *USER_ID_REGEX, message = "User id must be 1-64 of A-Z, a-z, 0-9, _ . @ -"))]
    pub user_id: String,
}

/// Status filter accepted by `GET /v1/users/{user_id}/books`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatusFilter {
    Active,
    Returned,
    #[default]
    All,
}

impl RentalStatusFilter {
    pub fn as_status(self) -> Option<RentalStatus> {
        match self {
            Self::Active => Some(RentalStatus::Active),
            Self::Returned => Some(RentalStatus::Returned),
            Self::All => None,
        }
    }
}

/// Query parameters for the user rentals endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UserBooksQuery {
    #[serde(default)]
    pub status: RentalStatusFilter,
}

/// One rental in a user's history, with book metadata.
#[derive(Debug, Serialize)]
pub struct UserRentalItem {
    pub rental_id: Uuid,
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub status: RentalStatus,
    pub rented_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl From<RentalWithBook> for UserRentalItem {
    fn from(item: RentalWithBook) -> Self {
        Self {
            rental_id: item.rental.id,
            status: item.rental.status(),
            book_id: item.rental.book_id,
            rented_at: item.rental.rented_at,
            returned_at: item.rental.returned_at,
            title: item.book.title,
            author: item.book.author,
        }
    }
}

/// Response for `GET /v1/users/{user_id}/books`.
#[derive(Debug, Serialize)]
pub struct UserBooksResponse {
    pub user_id: String,
    pub books: Vec<UserRentalItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_parsing() {
        let q: UserBooksQuery = serde_json::from_str(r#"{"status": "active"}"#).unwrap();
        assert_eq!(q.status.as_status(), Some(RentalStatus::Active));

        let q: UserBooksQuery = serde_json::from_str(r#"{"status": "returned"}"#).unwrap();
        assert_eq!(q.status.as_status(), Some(RentalStatus::Returned));

        let q: UserBooksQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.status, RentalStatusFilter::All);
        assert!(q.status.as_status().is_none());

        assert!(serde_json::from_str::<UserBooksQuery>(r#"{"status": "lost"}"#).is_err());
    }

    #[test]
    fn test_user_path_validation() {
        let ok = UserPath {
            user_id: "j.doe@example.org".to_string(),
        };
        assert!(ok.validate().is_ok());

        let errors = UserPath {
            user_id: "bad user".to_string(),
        }
        .validate()
        .unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
    }
}
