//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check (public)
//! - `/v1/*`        - Book rental API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on rent and return
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router construction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Rate limit rent and return; `None` disables limiting.
    pub rate_limit: Option<RateLimitSettings>,
}

/// Builds the application router without path normalization.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn router(state: AppState, options: RouterOptions) -> Result<Router> {
    let rentals = api::routes::rental_routes();
    let rentals = match options.rate_limit {
        Some(settings) if settings.behind_proxy => rentals.layer(rate_limit::proxy_layer(settings)?),
        Some(settings) => rentals.layer(rate_limit::layer(settings)?),
        None => rentals,
    };

    let v1 = api::routes::catalog_routes().merge(rentals);

    Ok(Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", v1)
        .with_state(state)
        .layer(tracing::layer()))
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/v1/books/` and
/// `/v1/books` are the same resource.
pub fn app_router(state: AppState, options: RouterOptions) -> Result<NormalizePath<Router>> {
    let router = router(state, options)?;
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
