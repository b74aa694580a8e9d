//! Fixed in-game colour palette

use crate::types::{CUSTOM_COLOR_INDEX, ColorHex};

/// The eight selectable palette colours, in wire index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    White,
    Green,
    YellowGreen,
    GreenYellow,
    Yellow,
    Cyan,
    Pink,
    Red,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::White,
        PaletteColor::Green,
        PaletteColor::YellowGreen,
        PaletteColor::GreenYellow,
        PaletteColor::Yellow,
        PaletteColor::Cyan,
        PaletteColor::Pink,
        PaletteColor::Red,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            PaletteColor::White => (0xFF, 0xFF, 0xFF),
            PaletteColor::Green => (0x00, 0xFF, 0x00),
            PaletteColor::YellowGreen => (0x7F, 0xFF, 0x00),
            PaletteColor::GreenYellow => (0xDF, 0xFF, 0x00),
            PaletteColor::Yellow => (0xFF, 0xFF, 0x00),
            PaletteColor::Cyan => (0x00, 0xFF, 0xFF),
            PaletteColor::Pink => (0xFF, 0x00, 0xFF),
            PaletteColor::Red => (0xFF, 0x00, 0x00),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::White => "White",
            PaletteColor::Green => "Green",
            PaletteColor::YellowGreen => "Yellow Green",
            PaletteColor::GreenYellow => "Green Yellow",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Cyan => "Cyan",
            PaletteColor::Pink => "Pink",
            PaletteColor::Red => "Red",
        }
    }

    /// Opaque `RRGGBBFF` value stored in a profile's hex colour field.
    pub const fn hex(self) -> ColorHex {
        let (r, g, b) = self.rgb();
        ColorHex::from_rgb(r, g, b)
    }
}

/// Hex value the palette assigns to `index`, or `None` for the custom
/// index and anything out of range.
pub fn palette_hex(index: u8) -> Option<ColorHex> {
    PaletteColor::from_index(index).map(PaletteColor::hex)
}

/// Display name of a colour index, including `"Custom"` for index 8.
pub fn color_name(index: u8) -> Option<&'static str> {
    if index == CUSTOM_COLOR_INDEX {
        return Some("Custom");
    }
    PaletteColor::from_index(index).map(PaletteColor::name)
}
