//! Crosshair profile type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Palette index that marks the hex colour as authoritative.
pub const CUSTOM_COLOR_INDEX: u8 = 8;

/// Colour packed as `RRGGBBAA`, rendered as eight upper-case hex digits.
///
/// Palette colours are stored with a fully opaque trailing byte
/// (`00FF00FF` for green). Wire values are taken verbatim, so a six digit
/// wire value such as `00FF00` becomes `FF00FF00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorHex(u32);

impl ColorHex {
    /// Opaque white, the baseline value of every hex colour field.
    pub const WHITE: ColorHex = ColorHex(0xFFFF_FFFF);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Build an opaque colour from its red, green and blue channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, 0xFF]))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Red, green and blue channels (the leading three bytes).
    pub const fn rgb(self) -> (u8, u8, u8) {
        let [r, g, b, _] = self.0.to_be_bytes();
        (r, g, b)
    }
}

impl Default for ColorHex {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl FromStr for ColorHex {
    type Err = CodecError;

    /// Accepts six or eight hex digits, with or without a leading `#`.
    /// Six digit values get an opaque `FF` appended.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let padded = match digits.len() {
            6 => format!("{digits}FF"),
            8 => digits.to_string(),
            _ => return Err(CodecError::InvalidHexColor(s.to_string())),
        };
        u32::from_str_radix(&padded, 16)
            .map(Self)
            .map_err(|_| CodecError::InvalidHexColor(s.to_string()))
    }
}

impl TryFrom<String> for ColorHex {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorHex> for String {
    fn from(value: ColorHex) -> Self {
        value.to_string()
    }
}

/// Full crosshair configuration for all three view modes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub general: General,
    pub primary: Crosshair,
    pub ads: Crosshair,
    pub sniper: Sniper,
}

impl Profile {
    pub fn crosshair(&self, mode: Mode) -> &Crosshair {
        match mode {
            Mode::Primary => &self.primary,
            Mode::Ads => &self.ads,
        }
    }

    pub fn crosshair_mut(&mut self, mode: Mode) -> &mut Crosshair {
        match mode {
            Mode::Primary => &mut self.primary,
            Mode::Ads => &mut self.ads,
        }
    }

    /// Re-derive every hex colour from the palette where a palette index is
    /// selected. Custom colours (index 8) are left untouched.
    pub fn sync_palette_colors(&mut self) {
        sync_hex(self.primary.color, &mut self.primary.hex_color);
        sync_hex(self.ads.color, &mut self.ads.hex_color);
        sync_hex(self.sniper.color, &mut self.sniper.hex_color);
    }
}

fn sync_hex(color: u8, hex: &mut HexColor) {
    if color == CUSTOM_COLOR_INDEX {
        return;
    }
    if let Some(value) = crate::palette_hex(color) {
        hex.value = value;
    }
}

/// Crosshair modes that carry a full line-based crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Primary,
    Ads,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct General {
    pub advanced_options: bool,
    pub ads_use_primary: bool,
    pub overwrite_all_primary: bool,
    pub hide_on_fire: bool,
    pub follow_spectating: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            advanced_options: false,
            ads_use_primary: true,
            overwrite_all_primary: false,
            hide_on_fire: true,
            follow_spectating: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexColor {
    pub enabled: bool,
    pub value: ColorHex,
}

impl Default for HexColor {
    fn default() -> Self {
        Self {
            enabled: false,
            value: ColorHex::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlines {
    pub enabled: bool,
    pub width: u8,
    pub alpha: f64,
}

impl Default for Outlines {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 1,
            alpha: 0.5,
        }
    }
}

/// Centre dot of the primary and ADS crosshairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub enabled: bool,
    pub width: u8,
    pub alpha: f64,
}

impl Default for Dot {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 2,
            alpha: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertical {
    pub enabled: bool,
    pub length: u8,
}

/// Error multiplier applied while moving or firing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multiplier {
    pub enabled: bool,
    pub mul: f64,
}

impl Multiplier {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, mul: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub enabled: bool,
    pub width: u8,
    pub length: u8,
    pub vertical: Vertical,
    pub offset: u8,
    pub alpha: f64,
    pub move_mul: Multiplier,
    pub fire_mul: Multiplier,
}

impl Line {
    /// Baseline inner lines: 6 long, 3 from centre.
    pub fn default_inner() -> Self {
        Self {
            enabled: true,
            width: 2,
            length: 6,
            vertical: Vertical {
                enabled: false,
                length: 6,
            },
            offset: 3,
            alpha: 0.8,
            move_mul: Multiplier::new(false),
            fire_mul: Multiplier::new(true),
        }
    }

    /// Baseline outer lines: 2 long, 10 from centre.
    pub fn default_outer() -> Self {
        Self {
            enabled: true,
            width: 2,
            length: 2,
            vertical: Vertical {
                enabled: false,
                length: 2,
            },
            offset: 10,
            alpha: 0.35,
            move_mul: Multiplier::new(true),
            fire_mul: Multiplier::new(true),
        }
    }

    /// Whether the line actually draws something on screen.
    pub fn is_visible(&self) -> bool {
        self.enabled && self.alpha > 0.5 && self.width > 0 && self.length > 0
    }
}

/// Which pair of lines a line field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineSlot {
    Inner,
    Outer,
}

/// Line-based crosshair used by the primary and ADS modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Crosshair {
    pub color: u8,
    pub use_custom_color: bool,
    pub hex_color: HexColor,
    pub outlines: Outlines,
    pub dot: Dot,
    pub overwrite_fire_mul: bool,
    pub inner: Line,
    pub outer: Line,
}

impl Crosshair {
    pub fn line(&self, slot: LineSlot) -> &Line {
        match slot {
            LineSlot::Inner => &self.inner,
            LineSlot::Outer => &self.outer,
        }
    }

    pub fn line_mut(&mut self, slot: LineSlot) -> &mut Line {
        match slot {
            LineSlot::Inner => &mut self.inner,
            LineSlot::Outer => &mut self.outer,
        }
    }

    /// At least one of the inner lines, outer lines or centre dot is visible.
    pub fn has_visible_part(&self) -> bool {
        self.inner.is_visible()
            || self.outer.is_visible()
            || (self.dot.enabled && self.dot.alpha > 0.5 && self.dot.width > 0)
    }
}

impl Default for Crosshair {
    fn default() -> Self {
        Self {
            color: 0,
            use_custom_color: false,
            hex_color: HexColor::default(),
            outlines: Outlines::default(),
            dot: Dot::default(),
            overwrite_fire_mul: false,
            inner: Line::default_inner(),
            outer: Line::default_outer(),
        }
    }
}

/// Sniper scope dot. Unlike [`Dot`] its width is fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SniperDot {
    pub enabled: bool,
    pub width: f64,
    pub alpha: f64,
}

impl Default for SniperDot {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 1.0,
            alpha: 0.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sniper {
    pub color: u8,
    pub use_custom_color: bool,
    pub hex_color: HexColor,
    pub dot: SniperDot,
}

impl Default for Sniper {
    fn default() -> Self {
        Self {
            color: 7,
            use_custom_color: false,
            hex_color: HexColor::default(),
            dot: SniperDot::default(),
        }
    }
}
