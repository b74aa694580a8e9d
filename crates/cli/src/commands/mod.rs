//! Command implementations for xhairctl CLI

pub mod background;
pub mod code;
pub mod random;

use crosshair_codec::{Decoded, decode_with_report};

use crate::error::CliError;

/// Decode a code, turning a missing leading category into [`CliError::InvalidCode`].
pub(crate) fn parse(code: &str) -> Result<Decoded, CliError> {
    decode_with_report(code).map_err(|source| CliError::InvalidCode {
        code: code.to_string(),
        source,
    })
}
