//! Rental entity linking a book copy to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Returned,
}

/// A rental record.
///
/// Rentals are never removed: once returned they stay as history for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    pub id: Uuid,
    pub book_id: String,
    pub user_id: String,
    pub rented_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl Rental {
    /// Starts a new active rental with a fresh random id.
    pub fn start(new_rental: NewRental, rented_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            book_id: new_rental.book_id,
            user_id: new_rental.user_id,
            rented_at,
            returned_at: None,
        }
    }

    pub fn status(&self) -> RentalStatus {
        if self.returned_at.is_some() {
            RentalStatus::Returned
        } else {
            RentalStatus::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Closes the rental at the given time.
    pub fn mark_returned(&mut self, returned_at: DateTime<Utc>) {
        self.returned_at = Some(returned_at);
    }
}

/// Input data for renting a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRental {
    pub book_id: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_rental() -> NewRental {
        NewRental {
            book_id: "9780441013593".to_string(),
            user_id: "alice".to_string(),
        }
    }

    #[test]
    fn test_started_rental_is_active() {
        let now = Utc::now();
        let rental = Rental::start(new_rental(), now);

        assert_eq!(rental.status(), RentalStatus::Active);
        assert_eq!(rental.rented_at, now);
        assert!(rental.returned_at.is_none());
        assert!(rental.is_owned_by("alice"));
        assert!(!rental.is_owned_by("bob"));
    }

    #[test]
    fn test_rental_ids_are_unique() {
        let now = Utc::now();
        let a = Rental::start(new_rental(), now);
        let b = Rental::start(new_rental(), now);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_mark_returned() {
        let mut rental = Rental::start(new_rental(), Utc::now());
        let returned_at = Utc::now();
        rental.mark_returned(returned_at);

        assert!(!rental.is_active());
        assert_eq!(rental.status(), RentalStatus::Returned);
        assert_eq!(rental.returned_at, Some(returned_at));
    }
}
