//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Books and rentals
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Business rules that span entities live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
