//! Crosshair code conversion commands

use anyhow::Result;
use crosshair_codec::{Profile, diff_profile, default_profile, encode, schema};
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info};

use crate::commands::parse;
use crate::error::CliError;
use crate::output;

/// Decode a code into a full profile
pub fn decode(code: &str, report: bool, json: bool) -> Result<()> {
    let decoded = parse(code)?;
    if !decoded.is_clean() {
        info!(skipped = decoded.issues.len(), "some pairs were skipped");
    }
    let issues = report.then_some(decoded.issues.as_slice());
    output::print_profile(&decoded.profile, issues, json)
}

/// Encode a JSON profile read from a file, or stdin for `-`
pub fn encode_profile(input: &str, json: bool) -> Result<()> {
    let content = read_input(input)?;
    let profile: Profile = serde_json::from_str(&content).map_err(CliError::from)?;
    validate(&profile)?;
    output::print_code(&encode(&profile), json)
}

/// Print a code in its minimal canonical form
pub fn normalize(code: &str, json: bool) -> Result<()> {
    let decoded = parse(code)?;
    let normalized = encode(&decoded.profile);
    debug!(input = code, output = %normalized, "normalized code");
    output::print_code(&normalized, json)
}

/// List the settings of a code that differ from the baseline
pub fn diff(code: &str, json: bool) -> Result<()> {
    let decoded = parse(code)?;
    let diff = diff_profile(default_profile(), &decoded.profile);
    output::print_diff(&diff.entries(), json)
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    Ok(fs::read_to_string(input)?)
}

/// Reject profiles holding values no code can express.
fn validate(profile: &Profile) -> Result<(), CliError> {
    let out_of_range: Vec<String> = schema::entries()
        .filter_map(|entry| {
            let value = profile.get(entry.field).as_f64();
            let range = f64::from(entry.min)..=f64::from(entry.max);
            (!range.contains(&value)).then(|| {
                format!(
                    "{} = {value} outside [{}, {}]",
                    entry.field, entry.min, entry.max
                )
            })
        })
        .collect();

    if out_of_range.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValidationError(out_of_range.join("; ")))
    }
}
