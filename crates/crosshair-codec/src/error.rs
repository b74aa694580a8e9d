//! Codec error types

use thiserror::Error;

/// Hard failures of the codec. Individual bad fields are never errors; they
/// are skipped and reported as [`crate::DecodeIssue`]s instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid crosshair code: must start with category `0`")]
    MissingLeadingCategory,

    #[error("Invalid hex colour `{0}`: expected 6 or 8 hexadecimal digits")]
    InvalidHexColor(String),
}

pub type CodecResult<T> = Result<T, CodecError>;
