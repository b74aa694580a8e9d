//! Wire key registry
//!
//! Every `<category>:<subkey>` pair of the crosshair code maps to exactly one
//! profile leaf together with its inclusive bounds, its numeric kind and the
//! transform applied on decode. Declaration order is significant: the encoder
//! emits fields in this order, so reordering entries changes every code the
//! encoder produces.

use std::fmt;

use crate::field::{CrosshairField, FieldPath, GeneralField, LineField, SniperField, Value};
use crate::types::{LineSlot, Mode};

/// Top-level section of a crosshair code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Primary,
    Ads,
    Sniper,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Primary,
        Category::Ads,
        Category::Sniper,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Category::General => "0",
            Category::Primary => "P",
            Category::Ads => "A",
            Category::Sniper => "S",
        }
    }

    /// Category switched to by a bare wire token, if the token is one.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

/// Conversion from the parsed wire number to the stored leaf value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    /// Any non-zero number is `true`.
    Flag,
    /// Unsigned integer rendered as an eight digit hex colour.
    HexPad,
}

impl Transform {
    pub fn apply(self, raw: f64) -> Value {
        match self {
            Transform::Identity => Value::Number(raw),
            Transform::Flag => Value::Flag(raw != 0.0),
            Transform::HexPad => Value::Hex(Value::Number(raw).as_hex()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub category: Category,
    pub subkey: &'static str,
    pub field: FieldPath,
    pub min: u32,
    pub max: u32,
    pub kind: NumberKind,
    pub transform: Transform,
}

impl SchemaEntry {
    /// Whether a parsed wire number is acceptable for this key.
    pub fn accepts(&self, raw: f64) -> bool {
        if !raw.is_finite() || raw < f64::from(self.min) || raw > f64::from(self.max) {
            return false;
        }
        match self.kind {
            NumberKind::Integer => raw.fract() == 0.0,
            NumberKind::Float => true,
        }
    }

    /// Wire key in `<category>:<subkey>` form.
    pub fn key(&self) -> String {
        format!("{}:{}", self.category, self.subkey)
    }
}

const fn flag(category: Category, subkey: &'static str, field: FieldPath) -> SchemaEntry {
    SchemaEntry {
        category,
        subkey,
        field,
        min: 0,
        max: 1,
        kind: NumberKind::Integer,
        transform: Transform::Flag,
    }
}

const fn int(
    category: Category,
    subkey: &'static str,
    field: FieldPath,
    min: u32,
    max: u32,
) -> SchemaEntry {
    SchemaEntry {
        category,
        subkey,
        field,
        min,
        max,
        kind: NumberKind::Integer,
        transform: Transform::Identity,
    }
}

const fn float(
    category: Category,
    subkey: &'static str,
    field: FieldPath,
    min: u32,
    max: u32,
) -> SchemaEntry {
    SchemaEntry {
        category,
        subkey,
        field,
        min,
        max,
        kind: NumberKind::Float,
        transform: Transform::Identity,
    }
}

const fn hex(category: Category, subkey: &'static str, field: FieldPath) -> SchemaEntry {
    SchemaEntry {
        category,
        subkey,
        field,
        min: 0,
        max: u32::MAX,
        kind: NumberKind::Integer,
        transform: Transform::HexPad,
    }
}

const fn gen_field(field: GeneralField) -> FieldPath {
    FieldPath::General(field)
}

const fn xh(mode: Mode, field: CrosshairField) -> FieldPath {
    FieldPath::Crosshair(mode, field)
}

const fn ln(mode: Mode, slot: LineSlot, field: LineField) -> FieldPath {
    FieldPath::Crosshair(mode, CrosshairField::Line(slot, field))
}

const fn sn(field: SniperField) -> FieldPath {
    FieldPath::Sniper(field)
}

/// The full entry block shared by the primary and ADS categories. General
/// flags that ride along in the primary block are added separately.
macro_rules! crosshair_entries {
    ($cat:expr, $mode:expr) => {
        [
            int($cat, "c", xh($mode, CrosshairField::Color), 0, 8),
            hex($cat, "u", xh($mode, CrosshairField::HexValue)),
            flag($cat, "h", xh($mode, CrosshairField::OutlinesEnabled)),
            int($cat, "t", xh($mode, CrosshairField::OutlinesWidth), 1, 6),
            float($cat, "o", xh($mode, CrosshairField::OutlinesAlpha), 0, 1),
            flag($cat, "d", xh($mode, CrosshairField::DotEnabled)),
            flag($cat, "b", xh($mode, CrosshairField::HexEnabled)),
            int($cat, "z", xh($mode, CrosshairField::DotWidth), 2, 6),
            float($cat, "a", xh($mode, CrosshairField::DotAlpha), 0, 1),
        ]
    };
}

macro_rules! line_entries {
    ($cat:expr, $mode:expr, $slot:expr, $prefix:literal, $max_len:expr, $max_offset:expr) => {
        [
            flag($cat, concat!($prefix, "b"), ln($mode, $slot, LineField::Enabled)),
            int($cat, concat!($prefix, "t"), ln($mode, $slot, LineField::Width), 0, 10),
            int($cat, concat!($prefix, "l"), ln($mode, $slot, LineField::Length), 0, $max_len),
            int($cat, concat!($prefix, "v"), ln($mode, $slot, LineField::VerticalLength), 0, 20),
            flag($cat, concat!($prefix, "g"), ln($mode, $slot, LineField::VerticalEnabled)),
            int($cat, concat!($prefix, "o"), ln($mode, $slot, LineField::Offset), 0, $max_offset),
            float($cat, concat!($prefix, "a"), ln($mode, $slot, LineField::Alpha), 0, 1),
            flag($cat, concat!($prefix, "m"), ln($mode, $slot, LineField::MoveMulEnabled)),
            flag($cat, concat!($prefix, "f"), ln($mode, $slot, LineField::FireMulEnabled)),
            float($cat, concat!($prefix, "s"), ln($mode, $slot, LineField::MoveMul), 0, 3),
            float($cat, concat!($prefix, "e"), ln($mode, $slot, LineField::FireMul), 0, 3),
        ]
    };
}

const GENERAL: [SchemaEntry; 3] = [
    flag(Category::General, "p", gen_field(GeneralField::AdsUsePrimary)),
    flag(Category::General, "c", gen_field(GeneralField::OverwriteAllPrimary)),
    flag(Category::General, "s", gen_field(GeneralField::AdvancedOptions)),
];

const PRIMARY_BASE: [SchemaEntry; 9] = crosshair_entries!(Category::Primary, Mode::Primary);

const PRIMARY_FLAGS: [SchemaEntry; 3] = [
    flag(Category::Primary, "f", gen_field(GeneralField::HideOnFire)),
    flag(Category::Primary, "s", gen_field(GeneralField::FollowSpectating)),
    flag(
        Category::Primary,
        "m",
        xh(Mode::Primary, CrosshairField::OverwriteFireMul),
    ),
];

const PRIMARY_INNER: [SchemaEntry; 11] =
    line_entries!(Category::Primary, Mode::Primary, LineSlot::Inner, "0", 20, 20);
const PRIMARY_OUTER: [SchemaEntry; 11] =
    line_entries!(Category::Primary, Mode::Primary, LineSlot::Outer, "1", 10, 40);

const ADS_BASE: [SchemaEntry; 9] = crosshair_entries!(Category::Ads, Mode::Ads);
const ADS_FLAGS: [SchemaEntry; 1] = [flag(
    Category::Ads,
    "m",
    xh(Mode::Ads, CrosshairField::OverwriteFireMul),
)];
const ADS_INNER: [SchemaEntry; 11] =
    line_entries!(Category::Ads, Mode::Ads, LineSlot::Inner, "0", 20, 20);
const ADS_OUTER: [SchemaEntry; 11] =
    line_entries!(Category::Ads, Mode::Ads, LineSlot::Outer, "1", 10, 40);

const SNIPER: [SchemaEntry; 6] = [
    flag(Category::Sniper, "b", sn(SniperField::HexEnabled)),
    int(Category::Sniper, "c", sn(SniperField::Color), 0, 8),
    hex(Category::Sniper, "t", sn(SniperField::HexValue)),
    flag(Category::Sniper, "d", sn(SniperField::DotEnabled)),
    float(Category::Sniper, "s", sn(SniperField::DotWidth), 0, 4),
    float(Category::Sniper, "o", sn(SniperField::DotAlpha), 0, 1),
];

const BLOCKS: [&[SchemaEntry]; 10] = [
    &GENERAL,
    &PRIMARY_BASE,
    &PRIMARY_FLAGS,
    &PRIMARY_INNER,
    &PRIMARY_OUTER,
    &ADS_BASE,
    &ADS_FLAGS,
    &ADS_INNER,
    &ADS_OUTER,
    &SNIPER,
];

/// Number of registered wire keys.
pub const ENTRY_COUNT: usize = 3 + (9 + 3 + 11 + 11) + (9 + 1 + 11 + 11) + 6;

/// All entries in declaration order.
pub fn entries() -> impl Iterator<Item = &'static SchemaEntry> {
    BLOCKS.into_iter().flatten()
}

/// Entries belonging to one category, in declaration order.
pub fn entries_for(category: Category) -> impl Iterator<Item = &'static SchemaEntry> {
    entries().filter(move |e| e.category == category)
}

/// Look up a wire key. Unknown keys yield `None`.
pub fn lookup(category: Category, subkey: &str) -> Option<&'static SchemaEntry> {
    entries_for(category).find(|e| e.subkey == subkey)
}
