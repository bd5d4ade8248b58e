//! Security response headers.
//!
//! # Responsibilities
//! - Stop browsers sniffing the play page or JSON as another type
//! - Keep the ROM path out of Referer headers sent to the front-end
//! - Stop caches holding per-request play pages
//!
//! # Design Decisions
//! - Headers are only added when the handler did not set them already

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Wrap `router` with the hardening headers.
pub fn apply_security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
