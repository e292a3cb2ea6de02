//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Result, anyhow};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket settings for the rent and return endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Seconds between replenishing one request.
    pub period_seconds: u64,
    /// Bucket size: requests allowed in a burst.
    pub burst_size: u32,
    /// Read the client IP from `X-Forwarded-For` / `X-Real-IP` instead of
    /// the socket peer address.
    pub behind_proxy: bool,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            period_seconds: 2,
            burst_size: 100,
            behind_proxy: false,
        }
    }
}

/// Creates a per-peer-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with connect info so the peer address is available.
///
/// # Errors
///
/// Returns an error if the settings describe an empty bucket or zero period.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/books/{book_id}/rent", post(rent_book_handler))
///     .layer(rate_limit::layer(RateLimitSettings::default())?);
/// ```
pub fn layer(
    settings: RateLimitSettings,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(settings.period_seconds)
        .burst_size(settings.burst_size)
        .finish()
        .ok_or_else(|| anyhow!("Invalid rate limit settings: {settings:?}"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Creates a rate limiter keyed by the forwarded client IP.
///
/// Only use behind a trusted reverse proxy, otherwise clients can pick their
/// own key through the headers.
pub fn proxy_layer(
    settings: RateLimitSettings,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(settings.period_seconds)
        .burst_size(settings.burst_size)
        .finish()
        .ok_or_else(|| anyhow!("Invalid rate limit settings: {settings:?}"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
