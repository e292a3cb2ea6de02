//! Infrastructure layer: concrete storage and seed loading.
//!
//! - [`catalog`] - JSON catalog parsing and validation
//! - [`persistence`] - In-memory repository implementations

pub mod catalog;
pub mod persistence;
