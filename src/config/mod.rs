//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flags / environment overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the core table is not configurable
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod overrides;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, read_config, ConfigError};
pub use overrides::ConfigOverrides;
pub use schema::{
    BridgeConfig, FrontendConfig, ListenerConfig, LogFormat, ObservabilityConfig, PlayConfig,
    SecurityConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
