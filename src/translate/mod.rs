//! Request translation subsystem.
//!
//! # Data Flow
//! ```text
//! GET /play?core=<libretro core>&rom=<url-encoded path>
//!     → rom_path.rs (decode, strip /roms/ mount prefix)
//!     → cores.rs (libretro core → EmulatorJS system)
//!     → destination.rs (build front-end launch URL)
//!     → LaunchPlan (handed to the page renderer)
//! ```
//!
//! # Design Decisions
//! - Pure functions only; no I/O and no shared mutable state
//! - Unknown cores fall back to NES instead of failing
//! - The front-end location comes from configuration, never literals

pub mod cores;
pub mod destination;
pub mod rom_path;

pub use cores::{CoreMap, FrontendCore};
pub use destination::FrontendTarget;
pub use rom_path::{decode_rom_param, normalize_rom_path};

use serde::Serialize;

use crate::config::FrontendConfig;

/// Everything the play page needs to hand the browser over to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    /// Core identifier exactly as the caller sent it.
    pub requested_core: String,
    /// ROM parameter exactly as the caller sent it (after query decoding).
    pub requested_rom: String,
    /// EmulatorJS system the core was mapped to.
    pub core: FrontendCore,
    /// ROM path relative to the front-end mount root.
    pub rom_path: String,
    /// Fully built front-end URL.
    pub destination: String,
}

/// Turns `/play` parameters into a [`LaunchPlan`].
#[derive(Debug, Clone)]
pub struct Translator {
    cores: CoreMap,
    frontend: FrontendTarget,
}

impl Translator {
    pub fn new(cores: CoreMap, frontend: FrontendTarget) -> Self {
        Self { cores, frontend }
    }

    /// Translator with the built-in core table.
    pub fn from_config(frontend: &FrontendConfig) -> Self {
        Self::new(CoreMap::builtin(), FrontendTarget::from_config(frontend))
    }

    /// Build the launch plan for a `core`/`rom` pair.
    pub fn plan(&self, core: &str, rom: &str) -> LaunchPlan {
        let decoded = decode_rom_param(rom);
        let rom_path = normalize_rom_path(&decoded).to_string();
        let mapped = self.cores.resolve(core);

        LaunchPlan {
            requested_core: core.to_string(),
            requested_rom: rom.to_string(),
            core: mapped,
            destination: self.frontend.launch_url(&rom_path, mapped),
            rom_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> Translator {
        Translator::from_config(&FrontendConfig::default())
    }

    #[test]
    fn test_plan_maps_core_and_strips_mount() {
        let plan = translator().plan("snes9x_libretro", "/roms/snes/Super Metroid.sfc");

        assert_eq!(plan.core, FrontendCore::Snes);
        assert_eq!(plan.rom_path, "snes/Super Metroid.sfc");
        assert_eq!(
            plan.destination,
            "http://localhost:8082/?rom=snes/Super%20Metroid.sfc&core=snes"
        );
        assert_eq!(plan.requested_core, "snes9x_libretro");
        assert_eq!(plan.requested_rom, "/roms/snes/Super Metroid.sfc");
    }

    #[test]
    fn test_plan_decodes_encoded_rom() {
        let plan = translator().plan("mgba_libretro", "%2Froms%2Fgba%2FMetroid%20Fusion.gba");

        assert_eq!(plan.rom_path, "gba/Metroid Fusion.gba");
        assert_eq!(plan.requested_rom, "%2Froms%2Fgba%2FMetroid%20Fusion.gba");
        assert!(plan.destination.ends_with("?rom=gba/Metroid%20Fusion.gba&core=gba"));
    }

    #[test]
    fn test_plan_unknown_core_uses_fallback() {
        let plan = translator().plan("dosbox_libretro", "roms/dos/doom.zip");

        assert_eq!(plan.core, FrontendCore::Nes);
        assert!(plan.destination.contains("core=nes"));
        assert!(!plan.destination.contains("dosbox"));
    }
}
