//! Command-line and environment overrides.
//!
//! Precedence: built-in defaults < TOML file < environment < flags.
//! clap resolves the last two, so this module only has to merge.

use clap::Args;

use crate::config::schema::BridgeConfig;

/// Settings that can be supplied without a config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Interface to listen on.
    #[arg(long, env = "BRIDGE_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "BRIDGE_PORT")]
    pub port: Option<u16>,

    /// EmulatorJS URL scheme.
    #[arg(long, env = "EMULATORJS_SCHEME")]
    pub frontend_scheme: Option<String>,

    /// EmulatorJS host as seen by the player's browser.
    #[arg(long, env = "EMULATORJS_HOST")]
    pub frontend_host: Option<String>,

    /// EmulatorJS port.
    #[arg(long, env = "EMULATORJS_PORT")]
    pub frontend_port: Option<u16>,

    /// Delay before the play page redirects, in milliseconds.
    #[arg(long, env = "BRIDGE_REDIRECT_DELAY_MS")]
    pub redirect_delay_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "BRIDGE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log every request.
    #[arg(long, env = "BRIDGE_ACCESS_LOG")]
    pub access_log: bool,

    /// Serve Prometheus metrics on this address.
    #[arg(long, env = "BRIDGE_METRICS_ADDRESS")]
    pub metrics_address: Option<String>,
}

impl ConfigOverrides {
    /// Apply every override that was given.
    pub fn apply(&self, config: &mut BridgeConfig) {
        if let Some(host) = &self.host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(scheme) = &self.frontend_scheme {
            config.frontend.scheme = scheme.clone();
        }
        if let Some(host) = &self.frontend_host {
            config.frontend.host = host.clone();
        }
        if let Some(port) = self.frontend_port {
            config.frontend.port = port;
        }
        if let Some(delay) = self.redirect_delay_ms {
            config.play.redirect_delay_ms = delay;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.access_log {
            config.observability.access_log = true;
        }
        if let Some(addr) = &self.metrics_address {
            config.observability.metrics_enabled = true;
            config.observability.metrics_address = addr.clone();
        }
    }
}
