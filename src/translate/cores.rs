//! Core identifier mapping.
//!
//! Callers name cores the way RetroArch does (`snes9x_libretro`), while
//! EmulatorJS wants a system name (`snes`). The table below is the whole
//! mapping; anything it does not list launches as NES.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// EmulatorJS system identifiers this bridge can hand off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendCore {
    Nes,
    Snes,
    Gb,
    Gba,
    Genesis,
}

impl FrontendCore {
    /// Identifier as it appears in the front-end `core` query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FrontendCore::Nes => "nes",
            FrontendCore::Snes => "snes",
            FrontendCore::Gb => "gb",
            FrontendCore::Gba => "gba",
            FrontendCore::Genesis => "genesis",
        }
    }
}

impl fmt::Display for FrontendCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System used for any core missing from [`LIBRETRO_CORES`].
pub const FALLBACK_CORE: FrontendCore = FrontendCore::Nes;

/// libretro core name → EmulatorJS system.
pub const LIBRETRO_CORES: &[(&str, FrontendCore)] = &[
    ("fceumm_libretro", FrontendCore::Nes),
    ("nestopia_libretro", FrontendCore::Nes),
    ("snes9x_libretro", FrontendCore::Snes),
    ("gambatte_libretro", FrontendCore::Gb),
    ("mgba_libretro", FrontendCore::Gba),
    ("genesis_plus_gx_libretro", FrontendCore::Genesis),
];

/// Immutable lookup table with a fallback.
#[derive(Debug, Clone)]
pub struct CoreMap {
    table: HashMap<&'static str, FrontendCore>,
    fallback: FrontendCore,
}

impl CoreMap {
    /// The built-in libretro table, falling back to NES.
    pub fn builtin() -> Self {
        Self {
            table: LIBRETRO_CORES.iter().copied().collect(),
            fallback: FALLBACK_CORE,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, core: &str) -> Option<FrontendCore> {
        self.table.get(core).copied()
    }

    /// Lookup that never fails.
    pub fn resolve(&self, core: &str) -> FrontendCore {
        self.get(core).unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> FrontendCore {
        self.fallback
    }

    /// Table entries sorted by source core name.
    pub fn entries(&self) -> Vec<(&'static str, FrontendCore)> {
        let mut entries: Vec<_> = self.table.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }
}

impl Default for CoreMap {
    fn default() -> Self {
        Self::builtin()
    }
}
