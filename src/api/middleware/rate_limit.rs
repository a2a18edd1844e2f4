//! Per-IP rate limiting.
//!
//! Token buckets keyed by the socket peer address. Three tiers: the
//! redirect path is the hot one (a popular slug behind one NAT'd office
//! IP can see many hits a minute) and gets the most headroom, the
//! authenticated API sits in the middle, and the unauthenticated API is
//! kept tight since it is the easiest surface to abuse.
//!
//! Requests over the limit receive `429 Too Many Requests`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type PerIpLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// One token per `replenish_secs` seconds, up to `burst` tokens banked.
fn per_ip(replenish_secs: u64, burst: u32) -> PerIpLayer {
    let config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_secs)
            .burst_size(burst)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(config)
}

/// Rate limiter for `GET /r/{slug}`.
pub fn redirect_layer() -> PerIpLayer {
    per_ip(1, 300)
}

/// Rate limiter for the authenticated link-management API.
pub fn api_layer() -> PerIpLayer {
    per_ip(1, 30)
}

/// Rate limiter for the unauthenticated API (feedback).
pub fn public_api_layer() -> PerIpLayer {
    per_ip(5, 10)
}
