//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bridge_requests_total` (counter): requests by method, route, status
//! - `bridge_request_duration_seconds` (histogram): latency distribution
//! - `bridge_play_requests_total` (counter): play pages by mapped core
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};

use crate::translate::FrontendCore;

const DURATION_BUCKETS: &[f64] = &[0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5];

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .set_buckets_for_metric(
            Matcher::Full("bridge_request_duration_seconds".to_string()),
            DURATION_BUCKETS,
        )?
        .install()?;

    tracing::debug!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Route label with bounded cardinality.
pub fn route_label(path: &str) -> &'static str {
    match path {
        "/play" => "/play",
        "/health" => "/health",
        "/" => "/",
        _ => "other",
    }
}

pub fn record_request(method: &str, route: &'static str, status: u16, start: Instant) {
    counter!(
        "bridge_requests_total",
        "method" => method.to_string(),
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "bridge_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_play(core: FrontendCore) {
    counter!("bridge_play_requests_total", "core" => core.as_str()).increment(1);
}

/// Middleware recording every request that reaches the router.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = route_label(request.uri().path());

    let response = next.run(request).await;
    record_request(&method, route, response.status().as_u16(), start);
    response
}
