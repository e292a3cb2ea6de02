//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; query inputs that
//! carry identifiers are checked with `validator`.

pub mod books;
pub mod health;
pub mod rentals;
pub mod users;
