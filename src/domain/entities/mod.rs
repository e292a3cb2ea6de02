//! Core domain entities.
//!
//! - [`Book`] - A catalog title with a number of rentable copies
//! - [`Rental`] - A copy of a book lent to a user
//!
//! `NewRental` carries the input for creating a rental; the id and timestamps
//! are assigned by the store.

pub mod book;
pub mod rental;

pub use book::{Book, BookStatus};
pub use rental::{NewRental, Rental, RentalStatus};
