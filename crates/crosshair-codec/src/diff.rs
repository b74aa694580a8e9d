//! Minimal difference between a profile and the baseline
//!
//! The diff is a sparse mirror of [`Profile`]: every leaf is `None` unless it
//! differs from the baseline and is worth encoding. Two rules keep it small:
//!
//! * Hidden sections are skipped. `ads` is ignored while the ADS crosshair
//!   reuses the primary one, and both `ads` and `sniper` are ignored while
//!   advanced options are off.
//! * A disabled toggleable node (hex colour, outlines, dot, line, vertical
//!   override, multiplier) contributes only `enabled = false`, and only when
//!   the baseline had it enabled.

use crate::field::{CrosshairField, FieldPath, GeneralField, LineField, SniperField, Value};
use crate::schema::{self, SchemaEntry};
use crate::types::{
    CUSTOM_COLOR_INDEX, ColorHex, Crosshair, Dot, General, HexColor, Line, LineSlot, Mode,
    Multiplier, Outlines, Profile, Sniper, SniperDot, Vertical,
};

fn changed<T: PartialEq + Copy>(base: T, current: T) -> Option<T> {
    (base != current).then_some(current)
}

/// Diff nodes that carry an `enabled` switch.
trait ToggleNode: Default {
    fn disabled() -> Self;
}

/// Short-circuit for a disabled node: `Some(diff)` means the node is settled.
fn settle_disabled<D: ToggleNode>(base_enabled: bool, current_enabled: bool) -> Option<D> {
    if current_enabled {
        None
    } else if base_enabled {
        Some(D::disabled())
    } else {
        Some(D::default())
    }
}

macro_rules! toggle_node {
    ($ty:ident) => {
        impl ToggleNode for $ty {
            fn disabled() -> Self {
                Self {
                    enabled: Some(false),
                    ..Self::default()
                }
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralDiff {
    pub advanced_options: Option<bool>,
    pub ads_use_primary: Option<bool>,
    pub overwrite_all_primary: Option<bool>,
    pub hide_on_fire: Option<bool>,
    pub follow_spectating: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexColorDiff {
    pub enabled: Option<bool>,
    pub value: Option<ColorHex>,
}

/// Outlines, centre dot and sniper dot share this shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartDiff {
    pub enabled: Option<bool>,
    pub width: Option<f64>,
    pub alpha: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalDiff {
    pub enabled: Option<bool>,
    pub length: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiplierDiff {
    pub enabled: Option<bool>,
    pub mul: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDiff {
    pub enabled: Option<bool>,
    pub width: Option<u8>,
    pub length: Option<u8>,
    pub vertical: VerticalDiff,
    pub offset: Option<u8>,
    pub alpha: Option<f64>,
    pub move_mul: MultiplierDiff,
    pub fire_mul: MultiplierDiff,
}

toggle_node!(HexColorDiff);
toggle_node!(PartDiff);
toggle_node!(VerticalDiff);
toggle_node!(MultiplierDiff);
toggle_node!(LineDiff);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrosshairDiff {
    pub color: Option<u8>,
    pub use_custom_color: Option<bool>,
    pub hex_color: HexColorDiff,
    pub outlines: PartDiff,
    pub dot: PartDiff,
    pub overwrite_fire_mul: Option<bool>,
    pub inner: LineDiff,
    pub outer: LineDiff,
}

impl CrosshairDiff {
    fn line(&self, slot: LineSlot) -> &LineDiff {
        match slot {
            LineSlot::Inner => &self.inner,
            LineSlot::Outer => &self.outer,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SniperDiff {
    pub color: Option<u8>,
    pub use_custom_color: Option<bool>,
    pub hex_color: HexColorDiff,
    pub dot: PartDiff,
}

/// Sparse set of profile leaves that differ from the baseline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDiff {
    pub general: GeneralDiff,
    pub primary: CrosshairDiff,
    pub ads: CrosshairDiff,
    pub sniper: SniperDiff,
}

impl ProfileDiff {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Changed value at `path`, if any.
    pub fn value_at(&self, path: FieldPath) -> Option<Value> {
        let flag = |v: Option<bool>| v.map(Value::Flag);
        let num = |v: Option<f64>| v.map(Value::Number);
        let small = |v: Option<u8>| v.map(|n| Value::Number(f64::from(n)));
        let hex = |v: Option<ColorHex>| v.map(Value::Hex);

        match path {
            FieldPath::General(field) => {
                let g = &self.general;
                flag(match field {
                    GeneralField::AdvancedOptions => g.advanced_options,
                    GeneralField::AdsUsePrimary => g.ads_use_primary,
                    GeneralField::OverwriteAllPrimary => g.overwrite_all_primary,
                    GeneralField::HideOnFire => g.hide_on_fire,
                    GeneralField::FollowSpectating => g.follow_spectating,
                })
            }
            FieldPath::Crosshair(mode, field) => {
                let c = match mode {
                    Mode::Primary => &self.primary,
                    Mode::Ads => &self.ads,
                };
                match field {
                    CrosshairField::Color => small(c.color),
                    CrosshairField::HexEnabled => flag(c.hex_color.enabled),
                    CrosshairField::HexValue => hex(c.hex_color.value),
                    CrosshairField::OutlinesEnabled => flag(c.outlines.enabled),
                    CrosshairField::OutlinesWidth => num(c.outlines.width),
                    CrosshairField::OutlinesAlpha => num(c.outlines.alpha),
                    CrosshairField::DotEnabled => flag(c.dot.enabled),
                    CrosshairField::DotWidth => num(c.dot.width),
                    CrosshairField::DotAlpha => num(c.dot.alpha),
                    CrosshairField::OverwriteFireMul => flag(c.overwrite_fire_mul),
                    CrosshairField::Line(slot, field) => {
                        let l = c.line(slot);
                        match field {
                            LineField::Enabled => flag(l.enabled),
                            LineField::Width => small(l.width),
                            LineField::Length => small(l.length),
                            LineField::VerticalEnabled => flag(l.vertical.enabled),
                            LineField::VerticalLength => small(l.vertical.length),
                            LineField::Offset => small(l.offset),
                            LineField::Alpha => num(l.alpha),
                            LineField::MoveMulEnabled => flag(l.move_mul.enabled),
                            LineField::MoveMul => num(l.move_mul.mul),
                            LineField::FireMulEnabled => flag(l.fire_mul.enabled),
                            LineField::FireMul => num(l.fire_mul.mul),
                        }
                    }
                }
            }
            FieldPath::Sniper(field) => {
                let s = &self.sniper;
                match field {
                    SniperField::Color => small(s.color),
                    SniperField::HexEnabled => flag(s.hex_color.enabled),
                    SniperField::HexValue => hex(s.hex_color.value),
                    SniperField::DotEnabled => flag(s.dot.enabled),
                    SniperField::DotWidth => num(s.dot.width),
                    SniperField::DotAlpha => num(s.dot.alpha),
                }
            }
        }
    }

    /// Changed leaves that have a wire key, in schema declaration order.
    pub fn entries(&self) -> Vec<(&'static SchemaEntry, Value)> {
        schema::entries()
            .filter_map(|entry| self.value_at(entry.field).map(|value| (entry, value)))
            .collect()
    }
}

/// Compute the leaves of `current` worth encoding relative to `base`.
///
/// Visibility flags are read from `current.general`.
pub fn diff_profile(base: &Profile, current: &Profile) -> ProfileDiff {
    let advanced = current.general.advanced_options;
    let ads_use_primary = current.general.ads_use_primary;

    ProfileDiff {
        general: diff_general(&base.general, &current.general),
        primary: diff_crosshair(&base.primary, &current.primary),
        ads: if advanced && !ads_use_primary {
            diff_crosshair(&base.ads, &current.ads)
        } else {
            CrosshairDiff::default()
        },
        sniper: if advanced {
            diff_sniper(&base.sniper, &current.sniper)
        } else {
            SniperDiff::default()
        },
    }
}

fn diff_general(base: &General, current: &General) -> GeneralDiff {
    GeneralDiff {
        advanced_options: changed(base.advanced_options, current.advanced_options),
        ads_use_primary: changed(base.ads_use_primary, current.ads_use_primary),
        overwrite_all_primary: changed(base.overwrite_all_primary, current.overwrite_all_primary),
        hide_on_fire: changed(base.hide_on_fire, current.hide_on_fire),
        follow_spectating: changed(base.follow_spectating, current.follow_spectating),
    }
}

fn diff_crosshair(base: &Crosshair, current: &Crosshair) -> CrosshairDiff {
    CrosshairDiff {
        color: changed(base.color, current.color),
        use_custom_color: changed(base.use_custom_color, current.use_custom_color),
        hex_color: diff_hex(&base.hex_color, &current.hex_color, current.color),
        outlines: diff_outlines(&base.outlines, &current.outlines),
        dot: diff_dot(&base.dot, &current.dot),
        overwrite_fire_mul: changed(base.overwrite_fire_mul, current.overwrite_fire_mul),
        inner: diff_line(&base.inner, &current.inner),
        outer: diff_line(&base.outer, &current.outer),
    }
}

fn diff_sniper(base: &Sniper, current: &Sniper) -> SniperDiff {
    SniperDiff {
        color: changed(base.color, current.color),
        use_custom_color: changed(base.use_custom_color, current.use_custom_color),
        hex_color: diff_hex(&base.hex_color, &current.hex_color, current.color),
        dot: diff_sniper_dot(&base.dot, &current.dot),
    }
}

/// The hex colour counts as enabled exactly when the custom index is selected,
/// whatever its stored `enabled` flag says.
fn diff_hex(base: &HexColor, current: &HexColor, color: u8) -> HexColorDiff {
    let enabled = color == CUSTOM_COLOR_INDEX;
    if let Some(settled) = settle_disabled(base.enabled, enabled) {
        return settled;
    }
    HexColorDiff {
        enabled: changed(base.enabled, enabled),
        value: changed(base.value, current.value),
    }
}

fn diff_outlines(base: &Outlines, current: &Outlines) -> PartDiff {
    if let Some(settled) = settle_disabled(base.enabled, current.enabled) {
        return settled;
    }
    PartDiff {
        enabled: changed(base.enabled, current.enabled),
        width: changed(f64::from(base.width), f64::from(current.width)),
        alpha: changed(base.alpha, current.alpha),
    }
}

fn diff_dot(base: &Dot, current: &Dot) -> PartDiff {
    if let Some(settled) = settle_disabled(base.enabled, current.enabled) {
        return settled;
    }
    PartDiff {
        enabled: changed(base.enabled, current.enabled),
        width: changed(f64::from(base.width), f64::from(current.width)),
        alpha: changed(base.alpha, current.alpha),
    }
}

fn diff_sniper_dot(base: &SniperDot, current: &SniperDot) -> PartDiff {
    if let Some(settled) = settle_disabled(base.enabled, current.enabled) {
        return settled;
    }
    PartDiff {
        enabled: changed(base.enabled, current.enabled),
        width: changed(base.width, current.width),
        alpha: changed(base.alpha, current.alpha),
    }
}

fn diff_line(base: &Line, current: &Line) -> LineDiff {
    if let Some(settled) = settle_disabled(base.enabled, current.enabled) {
        return settled;
    }
    LineDiff {
        enabled: changed(base.enabled, current.enabled),
        width: changed(base.width, current.width),
        length: changed(base.length, current.length),
        vertical: diff_vertical(&base.vertical, &current.vertical),
        offset: changed(base.offset, current.offset),
        alpha: changed(base.alpha, current.alpha),
        move_mul: diff_multiplier(&base.move_mul, &current.move_mul),
        fire_mul: diff_multiplier(&base.fire_mul, &current.fire_mul),
    }
}

fn diff_vertical(base: &Vertical, current: &Vertical) -> VerticalDiff {
    if let Some(settled) = settle_disabled(base.enabled, current.enabled) {
        return settled;
    }
    VerticalDiff {
        enabled: changed(base.enabled, current.enabled),
        length: changed(base.length, current.length),
    }
}

fn diff_multiplier(base: &Multiplier, current: &Multiplier) -> MultiplierDiff {
    if let Some(settled) = settle_disabled(base.enabled, current.enabled) {
        return settled;
    }
    MultiplierDiff {
        enabled: changed(base.enabled, current.enabled),
        mul: changed(base.mul, current.mul),
    }
}
