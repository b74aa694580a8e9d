//! Fuzzes preview background selection over arbitrary ids and codes.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_background
#![no_main]
use crosshair_codec::decode;
use crosshair_preview::{analyze_color, candidates, select_background};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((id_bytes, rest)) = data.split_first_chunk::<8>() else {
        return;
    };
    let crosshair_id = u64::from_le_bytes(*id_bytes);
    let Some(profile) = std::str::from_utf8(rest).ok().and_then(decode) else {
        return;
    };

    let background = select_background(crosshair_id, &profile);
    assert!(candidates(analyze_color(&profile).name).contains(&background));
});
