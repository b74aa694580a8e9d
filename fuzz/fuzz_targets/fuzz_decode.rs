//! Fuzzes the crosshair code decoder with arbitrary text.
//!
//! Any accepted code must normalize to a code that decodes back to the
//! same canonical form. Must never panic on any input.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_decode
#![no_main]
use crosshair_codec::{decode, decode_with_report, encode, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(code) = std::str::from_utf8(data) else {
        return;
    };

    let _ = decode_with_report(code);

    if let Ok(canonical) = normalize(code) {
        let reparsed = decode(&canonical);
        assert_eq!(reparsed.map(|profile| encode(&profile)), Some(canonical));
    }
});
