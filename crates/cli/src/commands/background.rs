//! Preview background selection command

use anyhow::Result;
use crosshair_preview::{analyze_color, select_background};

use crate::commands::parse;
use crate::output;

/// Print the preview background for crosshair `id` with the given code
pub fn execute(id: u64, code: &str, json: bool) -> Result<()> {
    let decoded = parse(code)?;
    let info = analyze_color(&decoded.profile);
    let background = select_background(id, &decoded.profile);
    output::print_background(id, &info, background, json)
}
