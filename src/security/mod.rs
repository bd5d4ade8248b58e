//! Security subsystem.
//!
//! The bridge accepts no bodies and calls no upstreams, so hardening is
//! limited to response headers.

pub mod headers;
