//! Deterministic preview background selection
//!
//! Every crosshair gets one of a small set of preview backgrounds. The pick
//! depends only on the crosshair id and its primary colour, so the same
//! crosshair always renders on the same background while a gallery of
//! similar crosshairs still varies.

use std::fmt;

use crosshair_codec::Profile;
use serde::Serialize;
use tracing::trace;

use crate::color::{ColorInfo, ColorName, analyze_color};

/// Directory the background assets are served from.
pub const ASSET_DIR: &str = "/assets/vcrdb-backgrounds";

/// Neutral background used whenever nothing better is known.
pub const DEFAULT_BACKGROUND: Background = Background::Metall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Blaugelb,
    Blue,
    Grass,
    Green,
    Metall,
    Orange,
    Sky,
    Yellow,
}

impl Background {
    /// Every available background. Candidate lists keep this order.
    pub const ALL: [Background; 8] = [
        Background::Blaugelb,
        Background::Blue,
        Background::Grass,
        Background::Green,
        Background::Metall,
        Background::Orange,
        Background::Sky,
        Background::Yellow,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Background::Blaugelb => "blaugelb.webp",
            Background::Blue => "blue.webp",
            Background::Grass => "grass.webp",
            Background::Green => "green.webp",
            Background::Metall => "metall.webp",
            Background::Orange => "orange.webp",
            Background::Sky => "sky.webp",
            Background::Yellow => "yellow.webp",
        }
    }

    /// Served path, e.g. `/assets/vcrdb-backgrounds/metall.webp`.
    pub fn asset_path(self) -> String {
        format!("{ASSET_DIR}/{}", self.file_name())
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Backgrounds that keep a colour family readable.
fn preferred(name: ColorName) -> [Background; 3] {
    use Background::{Blaugelb, Blue, Grass, Metall, Orange, Sky};

    match name {
        ColorName::White | ColorName::Pink => [Metall, Grass, Blue],
        ColorName::Green => [Metall, Blaugelb, Sky],
        ColorName::Yellow | ColorName::Orange => [Metall, Blue, Grass],
        ColorName::Cyan | ColorName::Blue => [Metall, Grass, Orange],
        ColorName::Purple => [Metall, Grass, Sky],
        ColorName::Red => [Metall, Grass, Blaugelb],
    }
}

/// Candidate backgrounds for a colour family, in [`Background::ALL`] order.
pub fn candidates(name: ColorName) -> Vec<Background> {
    let preferred = preferred(name);
    Background::ALL
        .into_iter()
        .filter(|bg| preferred.contains(bg))
        .collect()
}

/// 32-bit `h * 31 + c` string hash over UTF-16 code units, made non-negative.
pub fn string_hash(s: &str) -> u32 {
    s.encode_utf16()
        .fold(0i32, |hash, unit| {
            (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Selection seed: crosshair id plus colour value plus the hash of the
/// family and brightness names.
pub fn selection_seed(crosshair_id: u64, info: &ColorInfo) -> u64 {
    let key = format!("{}{}", info.name, info.luminance);
    crosshair_id
        .wrapping_add(u64::from(info.value))
        .wrapping_add(u64::from(string_hash(&key)))
}

/// Pick the preview background for a crosshair.
pub fn select_background(crosshair_id: u64, profile: &Profile) -> Background {
    let info = analyze_color(profile);
    let seed = selection_seed(crosshair_id, &info);
    let candidates = candidates(info.name);

    let picked = u64::try_from(candidates.len())
        .ok()
        .filter(|len| *len > 0)
        .and_then(|len| usize::try_from(seed % len).ok())
        .and_then(|index| candidates.get(index).copied())
        .unwrap_or(DEFAULT_BACKGROUND);

    trace!(crosshair_id, seed, name = %info.name, luminance = %info.luminance, background = %picked, "selected preview background");
    picked
}
