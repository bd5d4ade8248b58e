//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs (/play, /health, /, fallback)
//!     → translate (core + ROM path → launch plan)
//!     → page.rs (redirect page) or JSON status
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod page;
pub mod request;
pub mod server;

pub use error::BridgeError;
pub use handlers::SERVICE_NAME;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
