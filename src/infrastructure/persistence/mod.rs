//! Repository implementations.
//!
//! - [`InMemoryLibrary`] - Books and rentals held in process memory

pub mod in_memory_library;

pub use in_memory_library::InMemoryLibrary;
