//! Repository trait definitions for the domain layer.
//!
//! Traits abstract data access so services can be tested against `mockall`
//! mocks and run against the in-memory store in production.
//!
//! - [`BookRepository`] - Catalog lookups
//! - [`RentalRepository`] - Rental records and copy bookkeeping

pub mod book_repository;
pub mod rental_repository;

pub use book_repository::{BookFilter, BookRepository};
pub use rental_repository::RentalRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use rental_repository::MockRentalRepository;
