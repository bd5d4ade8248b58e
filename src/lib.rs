//! RetroArch to EmulatorJS bridge library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod translate;

pub use config::schema::BridgeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use translate::{LaunchPlan, Translator};
