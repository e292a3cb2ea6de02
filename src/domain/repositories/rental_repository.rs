//! Repository trait for rental records.

use crate::domain::entities::{Book, NewRental, Rental, RentalStatus};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage for rentals and the copy counters they hold.
///
/// Creating and returning a rental also updates the book's available copies.
/// Implementations must perform the check and both writes atomically so that
/// concurrent requests cannot rent more copies than exist.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLibrary`] - In-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Takes a copy of the book and records an active rental for the user.
    ///
    /// Returns the rental together with the updated book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Conflict`] if no copy is available or the user
    /// already holds an active rental of this book.
    async fn create(&self, new_rental: NewRental) -> Result<(Rental, Book), AppError>;

    /// Finds a rental by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, AppError>;

    /// Closes an active rental and puts its copy back.
    ///
    /// Returns the closed rental together with the updated book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rental does not exist.
    /// Returns [`AppError::Forbidden`] if the rental belongs to another user.
    /// Returns [`AppError::Conflict`] if the rental was already returned.
    async fn mark_returned(&self, id: Uuid, user_id: &str) -> Result<(Rental, Book), AppError>;

    /// Lists a user's rentals, newest first.
    ///
    /// `status` narrows the result to active or returned rentals.
    async fn list_by_user(
        &self,
        user_id: &str,
        status: Option<RentalStatus>,
    ) -> Result<Vec<Rental>, AppError>;
}
