//! Shared baseline profile

use std::sync::LazyLock;

use crate::types::Profile;

static DEFAULT_PROFILE: LazyLock<Profile> = LazyLock::new(Profile::default);

/// The baseline every decode starts from and every encode diffs against.
///
/// Shared and immutable; clone it before making changes.
pub fn default_profile() -> &'static Profile {
    &DEFAULT_PROFILE
}
