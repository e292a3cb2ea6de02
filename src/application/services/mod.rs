//! Business logic services for the application layer.

pub mod catalog_service;
pub mod rental_service;

pub use catalog_service::CatalogService;
pub use rental_service::{RentalService, RentalWithBook};
