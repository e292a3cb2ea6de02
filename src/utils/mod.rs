//! Helpers shared by the HTTP layer.
//!
//! - [`identifiers`] - Validation of user, book and rental identifiers

pub mod identifiers;
