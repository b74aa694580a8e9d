//! Snapshot tests for the crosshair codec.
//!
//! These tests lock in the wire format to catch accidental encoder and decoder
//! regressions.

use crosshair_codec::{
    ColorHex, DecodeIssue, Profile, decode, decode_with_report, encode, normalize, palette_hex,
};
use insta::assert_snapshot;

#[test]
fn test_snapshot_encode_default() {
    assert_snapshot!(encode(&Profile::default()), @"0");
}

#[test]
fn test_snapshot_concrete_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let profile = decode("0;P;c;1;o;1;d;1").ok_or("code must decode")?;

    let mut expected = Profile::default();
    expected.primary.color = 1;
    expected.primary.outlines.alpha = 1.0;
    expected.primary.dot.enabled = true;
    expected.sync_palette_colors();
    assert_eq!(profile, expected);

    assert_snapshot!(profile.primary.hex_color.value, @"00FF00FF");
    assert_snapshot!(encode(&profile), @"0;P;c;1;o;1;d;1");
    Ok(())
}

#[test]
fn test_snapshot_colour_sync_ignores_hex() -> Result<(), Box<dyn std::error::Error>> {
    let profile = decode("0;P;u;ABCDEF12;c;1").ok_or("code must decode")?;
    assert_eq!(Some(profile.primary.hex_color.value), palette_hex(1));
    assert_snapshot!(profile.primary.hex_color.value, @"00FF00FF");
    Ok(())
}

#[test]
fn test_snapshot_custom_colour() -> Result<(), Box<dyn std::error::Error>> {
    let profile = decode("0;P;c;8;u;00FF00;b;1").ok_or("code must decode")?;
    assert_eq!(profile.primary.hex_color.value, ColorHex::new(0xFF00_FF00));
    assert_snapshot!(encode(&profile), @"0;P;c;8;u;FF00FF00;b;1");
    Ok(())
}

#[test]
fn test_snapshot_advanced_profile() -> Result<(), Box<dyn std::error::Error>> {
    let code = "0;p;0;s;1;P;h;0;0t;4;0l;10;0o;1;1b;0;A;c;6;d;1;z;3;S;c;1;d;0";
    let profile = decode(code).ok_or("code must decode")?;

    assert!(profile.general.advanced_options);
    assert!(!profile.general.ads_use_primary);
    assert!(!profile.primary.outlines.enabled);
    assert_eq!(profile.primary.inner.width, 4);
    assert_eq!(profile.ads.color, 6);
    assert_eq!(profile.ads.dot.width, 3);
    assert!(!profile.sniper.dot.enabled);

    assert_snapshot!(encode(&profile), @"0;p;0;s;1;P;h;0;0t;4;0l;10;0o;1;1b;0;A;c;6;d;1;z;3;S;c;1;d;0");
    Ok(())
}

#[test]
fn test_snapshot_unknown_key_tolerated() -> Result<(), Box<dyn std::error::Error>> {
    let decoded = decode_with_report("0;P;zz;5")?;
    assert_eq!(Some(decoded.profile.clone()), decode("0"));
    assert_eq!(
        decoded.issues,
        vec![DecodeIssue::UnknownKey { key: "P:zz".into() }]
    );
    let issue = decoded.issues.first().ok_or("issue expected")?;
    assert_snapshot!(issue, @"unknown key P:zz");
    Ok(())
}

#[test]
fn test_snapshot_leading_token_required() {
    assert_eq!(decode("P;c;1"), None);
    assert_eq!(decode("  "), None);
    assert!(decode(" 0;P;c;1").is_some());
}

#[test]
fn test_snapshot_normalize_reorders() -> Result<(), Box<dyn std::error::Error>> {
    let code = normalize("0;P;1b;0;c;3;0;s;0;P;d;1")?;
    assert_snapshot!(code, @"0;P;c;3;1b;0");
    Ok(())
}
