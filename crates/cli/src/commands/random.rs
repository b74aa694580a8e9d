//! Random crosshair generation command

use anyhow::Result;
use crosshair_codec::{Randomizer, encode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::output;

/// Generate `count` random codes. A seed makes the output reproducible.
pub fn execute(count: u32, seed: Option<u64>, max_attempts: u32, json: bool) -> Result<()> {
    let randomizer = Randomizer::new().with_max_attempts(max_attempts);
    debug!(count, ?seed, max_attempts, "generating random crosshairs");

    let codes: Vec<String> = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count)
                .map(|_| encode(&randomizer.generate(&mut rng)))
                .collect()
        }
        None => {
            let mut rng = rand::rng();
            (0..count)
                .map(|_| encode(&randomizer.generate(&mut rng)))
                .collect()
        }
    };

    output::print_codes(&codes, json)
}
