//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Quiet by default: the startup banner is the only info-level line
//! - Request ID travels on the x-request-id header
//! - Metrics are cheap and disabled unless configured

pub mod logging;
pub mod metrics;
