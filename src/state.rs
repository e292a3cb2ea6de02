//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CatalogService, RentalService};
use crate::infrastructure::persistence::InMemoryLibrary;

/// Services handlers work with, all backed by one owned store.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<InMemoryLibrary>>,
    pub rental_service: Arc<RentalService<InMemoryLibrary, InMemoryLibrary>>,
}

impl AppState {
    /// Wires the services around a store.
    pub fn new(library: Arc<InMemoryLibrary>) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(library.clone())),
            rental_service: Arc::new(RentalService::new(library.clone(), library)),
        }
    }
}
