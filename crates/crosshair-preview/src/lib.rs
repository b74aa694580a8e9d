//! Preview helpers for crosshair profiles.
//!
//! Classifies the primary crosshair colour and picks a readable preview
//! background for it, deterministically per crosshair id.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod background;
pub mod color;

pub use background::{
    ASSET_DIR, Background, DEFAULT_BACKGROUND, candidates, select_background, selection_seed,
    string_hash,
};
pub use color::{ColorInfo, ColorName, Luminance, analyze_color};
