//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod health;
pub mod rentals;
pub mod users;

pub use books::{book_details_handler, list_books_handler};
pub use health::health_handler;
pub use rentals::{rent_book_handler, return_book_handler};
pub use users::user_books_handler;
