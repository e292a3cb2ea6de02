//! # Book Rental
//!
//! A small REST API for renting books from an in-memory catalog, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Books, rentals and repository traits
//! - **Application Layer** ([`application`]) - Catalog and rental services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and catalog loading
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `GET  /v1/books`
//! - `GET  /v1/books/{book_id}`
//! - `POST /v1/books/{book_name}/rent?user_id=...`
//! - `POST /v1/rentals/{rental_id}/return?user_id=...`
//! - `GET  /v1/users/{user_id}/books`
//! - `GET  /health`
//!
//! ## Quick Start
//!
//! ```bash
//! export CATALOG_PATH=books.json
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CatalogService, RentalService};
    pub use crate::domain::entities::{Book, BookStatus, Rental, RentalStatus};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLibrary;
    pub use crate::state::AppState;
}
