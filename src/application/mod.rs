//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP
//! handlers call.
//!
//! - [`services::CatalogService`] - Listing and resolving books
//! - [`services::RentalService`] - Renting, returning and rental history

pub mod services;
