//! Front-end launch URL construction.

use crate::config::FrontendConfig;
use crate::translate::cores::FrontendCore;

/// Where the EmulatorJS front-end is reachable from the player's browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendTarget {
    base: String,
}

impl FrontendTarget {
    pub fn new(scheme: &str, host: &str, port: u16) -> Self {
        Self {
            base: format!("{}://{}:{}/", scheme, host, port),
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(&config.scheme, &config.host, config.port)
    }

    /// Base URL including the trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// `<base>?rom=<encoded path>&core=<core>`
    pub fn launch_url(&self, rom_path: &str, core: FrontendCore) -> String {
        format!(
            "{}?rom={}&core={}",
            self.base,
            encode_rom_path(rom_path),
            core.as_str()
        )
    }
}

/// Percent-encode each path segment, keeping `/` separators literal.
pub fn encode_rom_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}
