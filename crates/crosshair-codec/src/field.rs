//! Typed addresses of individual profile leaves
//!
//! A [`FieldPath`] names one leaf of a [`Profile`]. The schema table maps wire
//! keys onto these paths, and the decoder, encoder and randomizer read and
//! write profile leaves exclusively through [`Profile::get`] and
//! [`Profile::set`].

use std::fmt;

use crate::types::{ColorHex, Crosshair, Line, LineSlot, Mode, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneralField {
    AdsUsePrimary,
    OverwriteAllPrimary,
    AdvancedOptions,
    HideOnFire,
    FollowSpectating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineField {
    Enabled,
    Width,
    Length,
    VerticalEnabled,
    VerticalLength,
    Offset,
    Alpha,
    MoveMulEnabled,
    MoveMul,
    FireMulEnabled,
    FireMul,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CrosshairField {
    Color,
    HexEnabled,
    HexValue,
    OutlinesEnabled,
    OutlinesWidth,
    OutlinesAlpha,
    DotEnabled,
    DotWidth,
    DotAlpha,
    OverwriteFireMul,
    Line(LineSlot, LineField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SniperField {
    Color,
    HexEnabled,
    HexValue,
    DotEnabled,
    DotWidth,
    DotAlpha,
}

/// Address of a single profile leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    General(GeneralField),
    Crosshair(Mode, CrosshairField),
    Sniper(SniperField),
}

impl FieldPath {
    /// True for the palette index and hex colour leaves, which the randomizer
    /// keeps in sync instead of sampling.
    pub fn is_color(self) -> bool {
        matches!(
            self,
            FieldPath::Crosshair(
                _,
                CrosshairField::Color | CrosshairField::HexEnabled | CrosshairField::HexValue
            ) | FieldPath::Sniper(
                SniperField::Color | SniperField::HexEnabled | SniperField::HexValue
            )
        )
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::General(field) => {
                let name = match field {
                    GeneralField::AdsUsePrimary => "adsUsePrimary",
                    GeneralField::OverwriteAllPrimary => "overwriteAllPrimary",
                    GeneralField::AdvancedOptions => "advancedOptions",
                    GeneralField::HideOnFire => "hideOnFire",
                    GeneralField::FollowSpectating => "followSpectating",
                };
                write!(f, "general.{name}")
            }
            FieldPath::Crosshair(mode, field) => {
                let section = match mode {
                    Mode::Primary => "primary",
                    Mode::Ads => "ads",
                };
                let leaf = match field {
                    CrosshairField::Color => "color",
                    CrosshairField::HexEnabled => "hexColor.enabled",
                    CrosshairField::HexValue => "hexColor.value",
                    CrosshairField::OutlinesEnabled => "outlines.enabled",
                    CrosshairField::OutlinesWidth => "outlines.width",
                    CrosshairField::OutlinesAlpha => "outlines.alpha",
                    CrosshairField::DotEnabled => "dot.enabled",
                    CrosshairField::DotWidth => "dot.width",
                    CrosshairField::DotAlpha => "dot.alpha",
                    CrosshairField::OverwriteFireMul => "overwriteFireMul",
                    CrosshairField::Line(slot, line) => {
                        let slot = match slot {
                            LineSlot::Inner => "inner",
                            LineSlot::Outer => "outer",
                        };
                        let leaf = match line {
                            LineField::Enabled => "enabled",
                            LineField::Width => "width",
                            LineField::Length => "length",
                            LineField::VerticalEnabled => "vertical.enabled",
                            LineField::VerticalLength => "vertical.length",
                            LineField::Offset => "offset",
                            LineField::Alpha => "alpha",
                            LineField::MoveMulEnabled => "moveMul.enabled",
                            LineField::MoveMul => "moveMul.mul",
                            LineField::FireMulEnabled => "fireMul.enabled",
                            LineField::FireMul => "fireMul.mul",
                        };
                        return write!(f, "{section}.{slot}.{leaf}");
                    }
                };
                write!(f, "{section}.{leaf}")
            }
            FieldPath::Sniper(field) => {
                let leaf = match field {
                    SniperField::Color => "color",
                    SniperField::HexEnabled => "hexColor.enabled",
                    SniperField::HexValue => "hexColor.value",
                    SniperField::DotEnabled => "dot.enabled",
                    SniperField::DotWidth => "dot.width",
                    SniperField::DotAlpha => "dot.alpha",
                };
                write!(f, "sniper.{leaf}")
            }
        }
    }
}

/// Value of a single profile leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Flag(bool),
    Number(f64),
    Hex(ColorHex),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Flag(flag) => {
                if flag {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => n,
            Value::Hex(hex) => f64::from(hex.value()),
        }
    }

    pub fn as_bool(self) -> bool {
        match self {
            Value::Flag(flag) => flag,
            Value::Number(n) => n != 0.0,
            Value::Hex(hex) => hex.value() != 0,
        }
    }

    pub fn as_hex(self) -> ColorHex {
        match self {
            Value::Hex(hex) => hex,
            Value::Number(n) => ColorHex::new(to_u32(n)),
            Value::Flag(flag) => ColorHex::new(u32::from(flag)),
        }
    }

    fn as_u8(self) -> u8 {
        let clamped = self.as_f64().round().clamp(0.0, f64::from(u8::MAX));
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to the u8 range"
        )]
        let narrowed = clamped as u8;
        narrowed
    }
}

fn to_u32(n: f64) -> u32 {
    let clamped = n.round().clamp(0.0, f64::from(u32::MAX));
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to the u32 range"
    )]
    let narrowed = clamped as u32;
    narrowed
}

/// Wire rendering: flags as `1`/`0`, numbers in shortest decimal form,
/// hex colours as eight upper-case digits.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Flag(flag) => f.write_str(if *flag { "1" } else { "0" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::Hex(hex) => write!(f, "{hex}"),
        }
    }
}

fn number(n: u8) -> Value {
    Value::Number(f64::from(n))
}

impl Profile {
    /// Read the leaf at `path`.
    pub fn get(&self, path: FieldPath) -> Value {
        match path {
            FieldPath::General(field) => {
                let g = &self.general;
                Value::Flag(match field {
                    GeneralField::AdsUsePrimary => g.ads_use_primary,
                    GeneralField::OverwriteAllPrimary => g.overwrite_all_primary,
                    GeneralField::AdvancedOptions => g.advanced_options,
                    GeneralField::HideOnFire => g.hide_on_fire,
                    GeneralField::FollowSpectating => g.follow_spectating,
                })
            }
            FieldPath::Crosshair(mode, field) => crosshair_get(self.crosshair(mode), field),
            FieldPath::Sniper(field) => {
                let s = &self.sniper;
                match field {
                    SniperField::Color => number(s.color),
                    SniperField::HexEnabled => Value::Flag(s.hex_color.enabled),
                    SniperField::HexValue => Value::Hex(s.hex_color.value),
                    SniperField::DotEnabled => Value::Flag(s.dot.enabled),
                    SniperField::DotWidth => Value::Number(s.dot.width),
                    SniperField::DotAlpha => Value::Number(s.dot.alpha),
                }
            }
        }
    }

    /// Overwrite the leaf at `path`, coercing `value` to the leaf's type.
    pub fn set(&mut self, path: FieldPath, value: Value) {
        match path {
            FieldPath::General(field) => {
                let g = &mut self.general;
                let slot = match field {
                    GeneralField::AdsUsePrimary => &mut g.ads_use_primary,
                    GeneralField::OverwriteAllPrimary => &mut g.overwrite_all_primary,
                    GeneralField::AdvancedOptions => &mut g.advanced_options,
                    GeneralField::HideOnFire => &mut g.hide_on_fire,
                    GeneralField::FollowSpectating => &mut g.follow_spectating,
                };
                *slot = value.as_bool();
            }
            FieldPath::Crosshair(mode, field) => {
                crosshair_set(self.crosshair_mut(mode), field, value);
            }
            FieldPath::Sniper(field) => {
                let s = &mut self.sniper;
                match field {
                    SniperField::Color => s.color = value.as_u8(),
                    SniperField::HexEnabled => s.hex_color.enabled = value.as_bool(),
                    SniperField::HexValue => s.hex_color.value = value.as_hex(),
                    SniperField::DotEnabled => s.dot.enabled = value.as_bool(),
                    SniperField::DotWidth => s.dot.width = value.as_f64(),
                    SniperField::DotAlpha => s.dot.alpha = value.as_f64(),
                }
            }
        }
    }
}

fn crosshair_get(c: &Crosshair, field: CrosshairField) -> Value {
    match field {
        CrosshairField::Color => number(c.color),
        CrosshairField::HexEnabled => Value::Flag(c.hex_color.enabled),
        CrosshairField::HexValue => Value::Hex(c.hex_color.value),
        CrosshairField::OutlinesEnabled => Value::Flag(c.outlines.enabled),
        CrosshairField::OutlinesWidth => number(c.outlines.width),
        CrosshairField::OutlinesAlpha => Value::Number(c.outlines.alpha),
        CrosshairField::DotEnabled => Value::Flag(c.dot.enabled),
        CrosshairField::DotWidth => number(c.dot.width),
        CrosshairField::DotAlpha => Value::Number(c.dot.alpha),
        CrosshairField::OverwriteFireMul => Value::Flag(c.overwrite_fire_mul),
        CrosshairField::Line(slot, field) => line_get(c.line(slot), field),
    }
}

fn crosshair_set(c: &mut Crosshair, field: CrosshairField, value: Value) {
    match field {
        CrosshairField::Color => c.color = value.as_u8(),
        CrosshairField::HexEnabled => c.hex_color.enabled = value.as_bool(),
        CrosshairField::HexValue => c.hex_color.value = value.as_hex(),
        CrosshairField::OutlinesEnabled => c.outlines.enabled = value.as_bool(),
        CrosshairField::OutlinesWidth => c.outlines.width = value.as_u8(),
        CrosshairField::OutlinesAlpha => c.outlines.alpha = value.as_f64(),
        CrosshairField::DotEnabled => c.dot.enabled = value.as_bool(),
        CrosshairField::DotWidth => c.dot.width = value.as_u8(),
        CrosshairField::DotAlpha => c.dot.alpha = value.as_f64(),
        CrosshairField::OverwriteFireMul => c.overwrite_fire_mul = value.as_bool(),
        CrosshairField::Line(slot, field) => line_set(c.line_mut(slot), field, value),
    }
}

fn line_get(line: &Line, field: LineField) -> Value {
    match field {
        LineField::Enabled => Value::Flag(line.enabled),
        LineField::Width => number(line.width),
        LineField::Length => number(line.length),
        LineField::VerticalEnabled => Value::Flag(line.vertical.enabled),
        LineField::VerticalLength => number(line.vertical.length),
        LineField::Offset => number(line.offset),
        LineField::Alpha => Value::Number(line.alpha),
        LineField::MoveMulEnabled => Value::Flag(line.move_mul.enabled),
        LineField::MoveMul => Value::Number(line.move_mul.mul),
        LineField::FireMulEnabled => Value::Flag(line.fire_mul.enabled),
        LineField::FireMul => Value::Number(line.fire_mul.mul),
    }
}

fn line_set(line: &mut Line, field: LineField, value: Value) {
    match field {
        LineField::Enabled => line.enabled = value.as_bool(),
        LineField::Width => line.width = value.as_u8(),
        LineField::Length => line.length = value.as_u8(),
        LineField::VerticalEnabled => line.vertical.enabled = value.as_bool(),
        LineField::VerticalLength => line.vertical.length = value.as_u8(),
        LineField::Offset => line.offset = value.as_u8(),
        LineField::Alpha => line.alpha = value.as_f64(),
        LineField::MoveMulEnabled => line.move_mul.enabled = value.as_bool(),
        LineField::MoveMul => line.move_mul.mul = value.as_f64(),
        LineField::FireMulEnabled => line.fire_mul.enabled = value.as_bool(),
        LineField::FireMul => line.fire_mul.mul = value.as_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER_MOVE_MUL: FieldPath = FieldPath::Crosshair(
        Mode::Ads,
        CrosshairField::Line(LineSlot::Inner, LineField::MoveMul),
    );

    #[test]
    fn test_field_path_display() {
        assert_eq!(
            FieldPath::General(GeneralField::HideOnFire).to_string(),
            "general.hideOnFire"
        );
        assert_eq!(INNER_MOVE_MUL.to_string(), "ads.inner.moveMul.mul");
        assert_eq!(
            FieldPath::Crosshair(Mode::Primary, CrosshairField::HexValue).to_string(),
            "primary.hexColor.value"
        );
        assert_eq!(
            FieldPath::Sniper(SniperField::DotWidth).to_string(),
            "sniper.dot.width"
        );
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut profile = Profile::default();
        profile.set(INNER_MOVE_MUL, Value::Number(2.5));
        assert_eq!(profile.ads.inner.move_mul.mul, 2.5);
        assert_eq!(profile.get(INNER_MOVE_MUL), Value::Number(2.5));
        assert_eq!(profile.primary.inner.move_mul.mul, 1.0, "primary untouched");
    }

    #[test]
    fn test_set_coerces_types() {
        let mut profile = Profile::default();
        let width = FieldPath::Crosshair(
            Mode::Primary,
            CrosshairField::Line(LineSlot::Outer, LineField::Width),
        );
        profile.set(width, Value::Number(7.0));
        assert_eq!(profile.primary.outer.width, 7);

        let hide = FieldPath::General(GeneralField::HideOnFire);
        profile.set(hide, Value::Number(0.0));
        assert!(!profile.general.hide_on_fire);

        let hex = FieldPath::Sniper(SniperField::HexValue);
        profile.set(hex, Value::Number(255.0));
        assert_eq!(profile.sniper.hex_color.value.to_string(), "000000FF");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Flag(true).to_string(), "1");
        assert_eq!(Value::Flag(false).to_string(), "0");
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(0.35).to_string(), "0.35");
        assert_eq!(Value::Hex(ColorHex::new(0xFF)).to_string(), "000000FF");
    }

    #[test]
    fn test_is_color() {
        assert!(FieldPath::Sniper(SniperField::HexEnabled).is_color());
        assert!(FieldPath::Crosshair(Mode::Primary, CrosshairField::Color).is_color());
        assert!(!FieldPath::Sniper(SniperField::DotAlpha).is_color());
    }
}
