//! Constrained random profile generation

use rand::Rng;
use tracing::{debug, warn};

use crate::defaults::default_profile;
use crate::field::{FieldPath, GeneralField};
use crate::schema::{self, Category, NumberKind, SchemaEntry};
use crate::types::{Line, Profile};

/// Attempts before the randomizer gives up on finding a visible crosshair.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Primary keys that keep their baseline value.
const PRESERVED: [FieldPath; 2] = [
    FieldPath::General(GeneralField::HideOnFire),
    FieldPath::General(GeneralField::FollowSpectating),
];

/// Rejection sampler producing profiles with at least one visible element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Randomizer {
    max_attempts: u32,
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer {
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Cap on primary resampling rounds. Zero is treated as one.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generate a random profile.
    ///
    /// The primary crosshair is resampled until its inner lines, outer lines
    /// or centre dot is visible. If that never happens within the attempt
    /// cap, the inner lines fall back to their baseline, which is visible.
    /// The sniper scope copies the primary colour, advanced options stay off.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Profile {
        let mut profile = default_profile().clone();
        let attempts = self.max_attempts.max(1);

        let mut accepted = None;
        for attempt in 1..=attempts {
            for entry in schema::entries_for(Category::Primary) {
                if !PRESERVED.contains(&entry.field) {
                    sample_into(&mut profile, entry, rng);
                }
            }
            if profile.primary.has_visible_part() {
                accepted = Some(attempt);
                break;
            }
        }

        match accepted {
            Some(attempt) => debug!(attempt, "random crosshair accepted"),
            None => {
                warn!(attempts, "no visible crosshair sampled, restoring default inner lines");
                profile.primary.inner = Line::default_inner();
            }
        }

        profile.sync_palette_colors();
        profile.sniper.color = profile.primary.color;
        profile.sniper.hex_color.value = profile.primary.hex_color.value;

        for entry in schema::entries_for(Category::Sniper) {
            if !entry.field.is_color() {
                sample_into(&mut profile, entry, rng);
            }
        }

        profile.general.advanced_options = false;
        profile
    }
}

/// Generate a random profile with the default attempt cap and the thread RNG.
pub fn random_profile() -> Profile {
    Randomizer::new().generate(&mut rand::rng())
}

fn sample_into<R: Rng + ?Sized>(profile: &mut Profile, entry: &SchemaEntry, rng: &mut R) {
    let raw = match entry.kind {
        NumberKind::Integer => f64::from(rng.random_range(entry.min..=entry.max)),
        NumberKind::Float => {
            let (min, max) = (f64::from(entry.min), f64::from(entry.max));
            let sampled = min + rng.random::<f64>() * (max - min);
            (sampled * 1000.0).round() / 1000.0
        }
    };
    profile.set(entry.field, entry.transform.apply(raw));
}
