//! Crosshair code codec: decoding, minimal-diff encoding and randomization.
//!
//! A crosshair code is a compact `;`-separated string such as
//! `0;P;c;1;o;1;d;1`. It opens with the general category token `0`, then
//! alternates category tokens (`0`, `P`, `A`, `S`) with `subkey;value` pairs.
//! Only settings that differ from the baseline profile are written, so the
//! baseline itself encodes as `0`.
//!
//! This crate is I/O-free. The key table, the baseline profile and the
//! palette are immutable statics, and every operation works on its own copy.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

pub mod decode;
pub mod defaults;
pub mod diff;
pub mod encode;
pub mod error;
pub mod field;
pub mod palette;
pub mod random;
pub mod schema;
pub mod types;

pub use decode::{DecodeIssue, Decoded, decode, decode_with_report, parse_code};
pub use defaults::default_profile;
pub use diff::{ProfileDiff, diff_profile};
pub use encode::{encode, encode_diff, normalize};
pub use error::{CodecError, CodecResult};
pub use field::{CrosshairField, FieldPath, GeneralField, LineField, SniperField, Value};
pub use palette::{PaletteColor, color_name, palette_hex};
pub use random::{DEFAULT_MAX_ATTEMPTS, Randomizer, random_profile};
pub use schema::{Category, NumberKind, SchemaEntry, Transform};
pub use types::{
    CUSTOM_COLOR_INDEX, ColorHex, Crosshair, Dot, General, HexColor, Line, LineSlot, Mode,
    Multiplier, Outlines, Profile, Sniper, SniperDot, Vertical,
};
