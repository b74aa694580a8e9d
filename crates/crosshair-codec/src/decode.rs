//! Crosshair code decoder
//!
//! Decoding is tolerant by construction: codes come from several game and
//! site versions, so a single unknown, malformed or out-of-range pair is
//! skipped rather than failing the whole code. The only hard failure is a
//! code that does not open with the general category token `0`.

use std::fmt;

use tracing::{debug, warn};

use crate::defaults::default_profile;
use crate::schema::{self, Category};
use crate::types::Profile;
use crate::{CodecError, CodecResult};

/// A wire pair the decoder skipped, or the reason it stopped early.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeIssue {
    /// No schema entry for `<category>:<subkey>`.
    UnknownKey { key: String },
    /// The code ended right after a key token.
    MissingValue { key: String },
    /// The value is neither a hex colour nor a finite decimal number.
    UnparsableValue { key: String, value: String },
    OutOfRange {
        key: String,
        value: f64,
        min: u32,
        max: u32,
    },
    NotInteger { key: String, value: f64 },
    /// A category token appeared twice; everything from `position` on was
    /// ignored and the palette colours were left unsynced.
    DuplicateCategory { category: Category, position: usize },
}

impl fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeIssue::UnknownKey { key } => write!(f, "unknown key {key}"),
            DecodeIssue::MissingValue { key } => write!(f, "missing value for {key}"),
            DecodeIssue::UnparsableValue { key, value } => {
                write!(f, "unparsable value {value:?} for {key}")
            }
            DecodeIssue::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(f, "value {value} for {key} outside [{min}, {max}]"),
            DecodeIssue::NotInteger { key, value } => {
                write!(f, "value {value} for {key} must be an integer")
            }
            DecodeIssue::DuplicateCategory { category, position } => write!(
                f,
                "duplicate category {category} at token {position}, rest of code ignored"
            ),
        }
    }
}

/// Result of a tolerant decode: the best-effort profile plus everything that
/// was skipped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub profile: Profile,
    pub issues: Vec<DecodeIssue>,
}

impl Decoded {
    /// True when every pair of the code was applied.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// True when decoding stopped at a repeated category.
    pub fn was_truncated(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| matches!(issue, DecodeIssue::DuplicateCategory { .. }))
    }
}

/// Decode a crosshair code, returning `None` when it does not start with the
/// mandatory `0` token.
pub fn decode(code: &str) -> Option<Profile> {
    parse_code(code).ok()
}

/// Decode a crosshair code.
///
/// # Errors
///
/// Returns [`CodecError::MissingLeadingCategory`] if the trimmed code does not
/// start with `0`.
pub fn parse_code(code: &str) -> CodecResult<Profile> {
    decode_with_report(code).map(|decoded| decoded.profile)
}

/// Decode a crosshair code and report every skipped pair.
///
/// # Errors
///
/// Returns [`CodecError::MissingLeadingCategory`] if the trimmed code does not
/// start with `0`.
pub fn decode_with_report(code: &str) -> CodecResult<Decoded> {
    if !code.trim().starts_with('0') {
        return Err(CodecError::MissingLeadingCategory);
    }

    let mut profile = default_profile().clone();
    let mut issues = Vec::new();
    let tokens: Vec<&str> = code.split(';').collect();

    let mut category = Category::General;
    let mut seen: Vec<Category> = Vec::with_capacity(Category::ALL.len());
    let mut i = 1;

    while let Some(&token) = tokens.get(i) {
        if let Some(next) = Category::from_token(token) {
            if seen.contains(&next) {
                warn!(category = %next, position = i, "duplicate category, aborting decode");
                issues.push(DecodeIssue::DuplicateCategory {
                    category: next,
                    position: i,
                });
                return Ok(Decoded { profile, issues });
            }
            seen.push(next);
            category = next;
            i += 1;
            continue;
        }

        let key = format!("{category}:{token}");
        let raw = match tokens.get(i + 1) {
            None => {
                debug!(%key, "missing value");
                issues.push(DecodeIssue::MissingValue { key });
                break;
            }
            Some(value) => match parse_value(value) {
                Some(raw) => raw,
                None => {
                    debug!(%key, value, "unparsable value");
                    issues.push(DecodeIssue::UnparsableValue {
                        key,
                        value: (*value).to_string(),
                    });
                    i += 2;
                    continue;
                }
            },
        };
        i += 2;

        let Some(entry) = schema::lookup(category, token) else {
            debug!(%key, "unknown key");
            issues.push(DecodeIssue::UnknownKey { key });
            continue;
        };

        if !(f64::from(entry.min)..=f64::from(entry.max)).contains(&raw) {
            debug!(%key, raw, min = entry.min, max = entry.max, "value out of bounds");
            issues.push(DecodeIssue::OutOfRange {
                key,
                value: raw,
                min: entry.min,
                max: entry.max,
            });
            continue;
        }
        if !entry.accepts(raw) {
            debug!(%key, raw, "value must be an integer");
            issues.push(DecodeIssue::NotInteger { key, value: raw });
            continue;
        }

        profile.set(entry.field, entry.transform.apply(raw));
    }

    profile.sync_palette_colors();
    Ok(Decoded { profile, issues })
}

/// Parse a wire value: six or eight hex digits (six digit values get an `FF`
/// prefix), otherwise a finite decimal number.
fn parse_value(token: &str) -> Option<f64> {
    if matches!(token.len(), 6 | 8) && token.bytes().all(|b| b.is_ascii_hexdigit()) {
        let padded = if token.len() == 6 {
            format!("FF{token}")
        } else {
            token.to_string()
        };
        return u32::from_str_radix(&padded, 16).ok().map(f64::from);
    }
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorHex;

    #[test]
    fn test_parse_value_decimal() {
        assert_eq!(parse_value("1"), Some(1.0));
        assert_eq!(parse_value("0.35"), Some(0.35));
        assert_eq!(parse_value(" 2 "), Some(2.0));
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("NaN"), None);
    }

    #[test]
    fn test_parse_value_hex() {
        assert_eq!(parse_value("FF0000FF"), Some(f64::from(0xFF00_00FFu32)));
        assert_eq!(parse_value("00ff00"), Some(f64::from(0xFF00_FF00u32)));
        // Six digit numerals are read as hex, not decimal.
        assert_eq!(parse_value("100000"), Some(f64::from(0xFF10_0000u32)));
        assert_eq!(parse_value("1234567"), Some(1_234_567.0));
    }

    #[test]
    fn test_decode_rejects_missing_leading_zero() {
        assert_eq!(decode("P;c;1"), None);
        assert_eq!(decode(""), None);
        assert_eq!(
            parse_code("1;P;c;1"),
            Err(CodecError::MissingLeadingCategory)
        );
    }

    #[test]
    fn test_decode_bare_zero_is_default() -> Result<(), Box<dyn std::error::Error>> {
        let decoded = decode_with_report("0")?;
        assert!(decoded.is_clean());

        let mut expected = Profile::default();
        expected.sync_palette_colors();
        assert_eq!(decoded.profile, expected);
        Ok(())
    }

    #[test]
    fn test_decode_concrete_scenario() -> Result<(), Box<dyn std::error::Error>> {
        let profile = parse_code("0;P;c;1;o;1;d;1")?;

        let mut expected = Profile::default();
        expected.primary.color = 1;
        expected.primary.outlines.alpha = 1.0;
        expected.primary.dot.enabled = true;
        expected.sync_palette_colors();

        assert_eq!(profile, expected);
        assert_eq!(profile.primary.hex_color.value.to_string(), "00FF00FF");
        Ok(())
    }

    #[test]
    fn test_decode_general_and_ads() -> Result<(), Box<dyn std::error::Error>> {
        let profile = parse_code("0;s;1;p;0;A;c;5;0l;12;1b;0")?;
        assert!(profile.general.advanced_options);
        assert!(!profile.general.ads_use_primary);
        assert_eq!(profile.ads.color, 5);
        assert_eq!(profile.ads.inner.length, 12);
        assert!(!profile.ads.outer.enabled);
        assert_eq!(profile.primary, crate::Crosshair::default());
        Ok(())
    }

    #[test]
    fn test_decode_custom_hex_kept_when_color_is_custom() -> Result<(), Box<dyn std::error::Error>> {
        let profile = parse_code("0;P;c;8;u;12AB34FF;b;1")?;
        assert_eq!(profile.primary.color, 8);
        assert!(profile.primary.hex_color.enabled);
        assert_eq!(profile.primary.hex_color.value, ColorHex::new(0x12AB_34FF));
        Ok(())
    }

    #[test]
    fn test_decode_palette_overrides_hex() -> Result<(), Box<dyn std::error::Error>> {
        let profile = parse_code("0;P;c;1;u;12AB34FF")?;
        assert_eq!(profile.primary.hex_color.value.to_string(), "00FF00FF");
        Ok(())
    }

    #[test]
    fn test_decode_reports_skipped_pairs() -> Result<(), Box<dyn std::error::Error>> {
        let decoded = decode_with_report("0;P;zz;5;t;9;0t;1.5;0a;x;c")?;
        assert_eq!(
            decoded.issues,
            vec![
                DecodeIssue::UnknownKey { key: "P:zz".into() },
                DecodeIssue::OutOfRange {
                    key: "P:t".into(),
                    value: 9.0,
                    min: 1,
                    max: 6
                },
                DecodeIssue::NotInteger {
                    key: "P:0t".into(),
                    value: 1.5
                },
                DecodeIssue::UnparsableValue {
                    key: "P:0a".into(),
                    value: "x".into()
                },
                DecodeIssue::MissingValue { key: "P:c".into() },
            ]
        );
        assert_eq!(decoded.profile, decode("0").unwrap_or_default());
        Ok(())
    }

    #[test]
    fn test_decode_duplicate_category_keeps_partial() -> Result<(), Box<dyn std::error::Error>> {
        let decoded = decode_with_report("0;P;c;1;P;c;2;t;4")?;
        assert!(decoded.was_truncated());
        assert_eq!(decoded.profile.primary.color, 1);
        assert_eq!(decoded.profile.primary.outlines.width, 1);
        Ok(())
    }

    #[test]
    fn test_decode_duplicate_category_skips_palette_sync() -> Result<(), Box<dyn std::error::Error>> {
        let profile = decode("0;P;c;1;P;t;4").ok_or("code must decode")?;
        assert_eq!(profile.primary.color, 1);
        assert_eq!(
            profile.primary.hex_color.value,
            default_profile().primary.hex_color.value
        );

        let profile = decode("0;P;c;1").ok_or("code must decode")?;
        assert_eq!(profile.primary.hex_color.value.to_string(), "00FF00FF");
        Ok(())
    }

    #[test]
    fn test_decode_rejects_numeric_prefix_values() -> Result<(), Box<dyn std::error::Error>> {
        let decoded = decode_with_report("0;P;c;1abc;t;2.5x")?;
        assert_eq!(decoded.profile.primary.color, 0);
        assert_eq!(decoded.profile.primary.outlines.width, 1);
        assert_eq!(
            decoded.issues,
            vec![
                DecodeIssue::UnparsableValue {
                    key: "P:c".into(),
                    value: "1abc".into()
                },
                DecodeIssue::UnparsableValue {
                    key: "P:t".into(),
                    value: "2.5x".into()
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_decode_allows_one_explicit_general_block() -> Result<(), Box<dyn std::error::Error>> {
        let decoded = decode_with_report("0;P;c;3;0;s;1")?;
        assert!(decoded.is_clean());
        assert!(decoded.profile.general.advanced_options);

        let decoded = decode_with_report("0;0;s;1;0;p;0")?;
        assert!(decoded.was_truncated());
        assert!(decoded.profile.general.ads_use_primary);
        Ok(())
    }

    #[test]
    fn test_decode_does_not_touch_shared_default() -> Result<(), Box<dyn std::error::Error>> {
        parse_code("0;P;c;4;h;0")?;
        assert_eq!(default_profile(), &Profile::default());
        Ok(())
    }

    #[test]
    fn test_issue_display() {
        let issue = DecodeIssue::OutOfRange {
            key: "P:t".into(),
            value: 9.0,
            min: 1,
            max: 6,
        };
        assert_eq!(issue.to_string(), "value 9 for P:t outside [1, 6]");
    }
}
