//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports, timeouts, delays)
//! - Check the front-end base URL is something a browser can follow
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs after CLI/env overrides are merged, before the server starts

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::BridgeConfig;

/// Longest redirect delay accepted for the play page.
pub const MAX_REDIRECT_DELAY_MS: u64 = 60_000;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host must not be empty")]
    EmptyListenerHost,

    #[error("frontend.port must not be 0")]
    ZeroFrontendPort,

    #[error("frontend.scheme must be http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("frontend URL {url:?} is invalid: {reason}")]
    InvalidFrontendUrl { url: String, reason: String },

    #[error("play.redirect_delay_ms must be at most {max}, got {0}", max = MAX_REDIRECT_DELAY_MS)]
    RedirectDelayTooLong(u64),

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a merged configuration, collecting every problem found.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyListenerHost);
    }

    let frontend = &config.frontend;
    if frontend.port == 0 {
        errors.push(ValidationError::ZeroFrontendPort);
    }
    if frontend.scheme != "http" && frontend.scheme != "https" {
        errors.push(ValidationError::UnsupportedScheme(frontend.scheme.clone()));
    } else {
        let base = format!("{}://{}:{}/", frontend.scheme, frontend.host, frontend.port);
        match Url::parse(&base) {
            Ok(url)
                if url.path() != "/"
                    || url.query().is_some()
                    || url.fragment().is_some()
                    || !url.username().is_empty()
                    || url.password().is_some() =>
            {
                errors.push(ValidationError::InvalidFrontendUrl {
                    url: base,
                    reason: "host must not contain a path, query, fragment or userinfo"
                        .to_string(),
                });
            }
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::InvalidFrontendUrl {
                url: base,
                reason: e.to_string(),
            }),
        }
    }

    if config.play.redirect_delay_ms > MAX_REDIRECT_DELAY_MS {
        errors.push(ValidationError::RedirectDelayTooLong(
            config.play.redirect_delay_ms,
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
