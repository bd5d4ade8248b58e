//! ROM path rewriting.
//!
//! The backend hands out paths such as `/roms/nes/game.nes`. EmulatorJS mounts
//! the same volume at its own data root and wants `nes/game.nes`.

use std::borrow::Cow;

/// Prefixes naming the backend's ROM mount, checked in order.
const MOUNT_PREFIXES: [&str; 2] = ["/roms/", "roms/"];

/// Percent-decode the `rom` parameter.
///
/// Invalid UTF-8 after decoding is replaced with U+FFFD rather than rejected.
pub fn decode_rom_param(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode_binary(raw.as_bytes()) {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

/// Rewrite a ROM path so it is relative to the front-end mount root.
///
/// A leading `/roms/` or `roms/` is removed; otherwise leading slashes are.
pub fn normalize_rom_path(path: &str) -> &str {
    MOUNT_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .unwrap_or_else(|| path.trim_start_matches('/'))
}
