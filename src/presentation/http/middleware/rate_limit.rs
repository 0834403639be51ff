// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type ApiRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limit shared by every API route: 10 requests per second
/// sustained, bursts of 20.
pub fn rate_limit_layer() -> Option<ApiRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<ApiRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_millisecond(100);
            builder.burst_size(20);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
            Some(GovernorLayer::new(config))
        })
        .clone()
}
