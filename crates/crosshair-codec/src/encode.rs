//! Crosshair code encoder

use crate::decode::parse_code;
use crate::defaults::default_profile;
use crate::diff::{ProfileDiff, diff_profile};
use crate::schema::Category;
use crate::types::Profile;
use crate::CodecResult;

/// Render a diff as a crosshair code.
///
/// Keys are emitted in schema declaration order, so equal diffs always give
/// byte-identical codes. An empty diff encodes as `"0"`.
pub fn encode_diff(diff: &ProfileDiff) -> String {
    let mut code = String::from(Category::General.token());
    let mut category = Category::General;

    for (entry, value) in diff.entries() {
        if entry.category != category {
            category = entry.category;
            code.push(';');
            code.push_str(category.token());
        }
        code.push_str(&format!(";{};{value}", entry.subkey));
    }
    code
}

/// Encode the parts of `profile` that differ from the baseline.
pub fn encode(profile: &Profile) -> String {
    encode_diff(&diff_profile(default_profile(), profile))
}

/// Re-encode a code in its minimal canonical form.
///
/// # Errors
///
/// Returns [`crate::CodecError::MissingLeadingCategory`] if the code does not
/// start with `0`.
pub fn normalize(code: &str) -> CodecResult<String> {
    parse_code(code).map(|profile| encode(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorHex;

    #[test]
    fn test_encode_default_is_zero() {
        assert_eq!(encode(&Profile::default()), "0");
        assert_eq!(encode_diff(&ProfileDiff::default()), "0");
    }

    #[test]
    fn test_encode_concrete_scenario() {
        let mut profile = Profile::default();
        profile.primary.color = 1;
        profile.primary.outlines.alpha = 1.0;
        profile.primary.dot.enabled = true;
        profile.sync_palette_colors();

        assert_eq!(encode(&profile), "0;P;c;1;o;1;d;1");
    }

    #[test]
    fn test_encode_groups_categories() {
        let mut profile = Profile::default();
        profile.general.advanced_options = true;
        profile.general.ads_use_primary = false;
        profile.primary.inner.alpha = 0.25;
        profile.ads.outer.enabled = false;
        profile.sniper.dot.width = 2.5;

        assert_eq!(
            encode(&profile),
            "0;p;0;s;1;P;0a;0.25;A;1b;0;S;s;2.5"
        );
    }

    #[test]
    fn test_encode_custom_hex() {
        let mut profile = Profile::default();
        profile.primary.color = 8;
        profile.primary.hex_color.value = ColorHex::new(0x12AB_34FF);

        assert_eq!(encode(&profile), "0;P;c;8;u;12AB34FF;b;1");
    }

    #[test]
    fn test_encode_general_flags_in_primary_block() {
        let mut profile = Profile::default();
        profile.general.hide_on_fire = false;
        profile.primary.overwrite_fire_mul = true;

        assert_eq!(encode(&profile), "0;P;f;0;m;1");
    }

    #[test]
    fn test_normalize() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(normalize("0;P;d;1;c;1;o;1.0;zz;3")?, "0;P;c;1;o;1;d;1");
        assert_eq!(normalize("0;P;c;0")?, "0");
        assert!(normalize("P;c;1").is_err());
        Ok(())
    }
}
