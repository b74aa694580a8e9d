//! Colour classification of a crosshair profile

use std::fmt;

use crosshair_codec::{CUSTOM_COLOR_INDEX, PaletteColor, Profile};
use serde::Serialize;

/// Coarse colour family used to pick a contrasting preview background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    White,
    Green,
    Yellow,
    Cyan,
    Pink,
    Purple,
    Red,
    Orange,
    Blue,
}

impl ColorName {
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorName::White => "white",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Cyan => "cyan",
            ColorName::Pink => "pink",
            ColorName::Purple => "purple",
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Blue => "blue",
        }
    }

    /// Family of a palette index. Indices outside the palette read as white.
    pub const fn from_palette_index(index: u8) -> Self {
        match index {
            1 => ColorName::Green,
            2 | 7 => ColorName::Yellow,
            3 => ColorName::Cyan,
            4 => ColorName::Pink,
            5 => ColorName::Purple,
            _ => ColorName::White,
        }
    }

    /// Family of an arbitrary RGB colour: the strictly dominant channel wins,
    /// then a few two-channel blends.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        if r > g && r > b {
            ColorName::Red
        } else if g > r && g > b {
            ColorName::Green
        } else if b > r && b > g {
            ColorName::Blue
        } else if r > 200 && g > 200 {
            ColorName::Yellow
        } else if r > 200 && b < 100 {
            ColorName::Orange
        } else if b > 200 && g > 200 {
            ColorName::Cyan
        } else {
            ColorName::White
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Luminance {
    Dark,
    Medium,
    Bright,
}

impl Luminance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Luminance::Dark => "dark",
            Luminance::Medium => "medium",
            Luminance::Bright => "bright",
        }
    }

    /// Perceived brightness bucket: above 0.6 is bright, below 0.3 is dark.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let luminance =
            (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
        if luminance > 0.6 {
            Luminance::Bright
        } else if luminance < 0.3 {
            Luminance::Dark
        } else {
            Luminance::Medium
        }
    }
}

impl fmt::Display for Luminance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour summary of the primary crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorInfo {
    pub name: ColorName,
    pub luminance: Luminance,
    /// Palette index, or `(r + g + b) % 255` for a custom colour.
    pub value: u32,
}

/// Classify the primary crosshair colour.
pub fn analyze_color(profile: &Profile) -> ColorInfo {
    let crosshair = &profile.primary;

    if crosshair.color == CUSTOM_COLOR_INDEX {
        let (r, g, b) = crosshair.hex_color.value.rgb();
        return ColorInfo {
            name: ColorName::from_rgb(r, g, b),
            luminance: Luminance::from_rgb(r, g, b),
            value: (u32::from(r) + u32::from(g) + u32::from(b)) % 255,
        };
    }

    let luminance = PaletteColor::from_index(crosshair.color)
        .map_or(Luminance::Medium, |color| {
            let (r, g, b) = color.rgb();
            Luminance::from_rgb(r, g, b)
        });

    ColorInfo {
        name: ColorName::from_palette_index(crosshair.color),
        luminance,
        value: u32::from(crosshair.color),
    }
}
