//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::*;
use crosshair_codec::{DecodeIssue, Profile, SchemaEntry, Value, color_name};
use crosshair_preview::{Background, ColorInfo};
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a decoded profile, optionally with the pairs the decoder skipped
pub fn print_profile(profile: &Profile, issues: Option<&[DecodeIssue]>, json: bool) -> Result<()> {
    if json {
        let mut output = json!({
            "success": true,
            "profile": profile,
        });
        if let (Some(issues), Some(fields)) = (issues, output.as_object_mut()) {
            let issues: Vec<String> = issues.iter().map(ToString::to_string).collect();
            fields.insert("issues".to_string(), json!(issues));
        }
        return print_json(&output);
    }

    let primary = &profile.primary;
    println!(
        "{} {} ({})",
        "Primary colour:".bold(),
        color_name(primary.color).unwrap_or("Unknown").cyan(),
        primary.hex_color.value
    );
    print!("{}", serde_yaml::to_string(profile)?);

    if let Some(issues) = issues {
        print_issues(issues);
    }
    Ok(())
}

fn print_issues(issues: &[DecodeIssue]) {
    if issues.is_empty() {
        println!("{} every pair applied", "✓".green());
        return;
    }
    println!("{}", "Skipped:".yellow().bold());
    for issue in issues {
        println!("  {} {}", "⚠".yellow(), issue);
    }
}

/// Print a single crosshair code
pub fn print_code(code: &str, json: bool) -> Result<()> {
    if json {
        return print_json(&json!({ "success": true, "code": code }));
    }
    println!("{}", code);
    Ok(())
}

/// Print generated crosshair codes, one per line
pub fn print_codes(codes: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(&json!({ "success": true, "codes": codes }));
    }
    for code in codes {
        println!("{}", code);
    }
    Ok(())
}

/// Print the settings of a code that differ from the baseline
pub fn print_diff(entries: &[(&'static SchemaEntry, Value)], json: bool) -> Result<()> {
    if json {
        let changes: Vec<_> = entries
            .iter()
            .map(|(entry, value)| {
                json!({
                    "key": entry.key(),
                    "path": entry.field.to_string(),
                    "value": value.to_string(),
                })
            })
            .collect();
        return print_json(&json!({ "success": true, "changes": changes }));
    }

    if entries.is_empty() {
        println!("{}", "No changes from the default profile".yellow());
        return Ok(());
    }
    for (entry, value) in entries {
        println!(
            "  {:<5} {:<34} {}",
            entry.key().bold(),
            entry.field.to_string().dimmed(),
            value
        );
    }
    Ok(())
}

/// Print the preview background picked for a crosshair
pub fn print_background(
    crosshair_id: u64,
    info: &ColorInfo,
    background: Background,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&json!({
            "success": true,
            "id": crosshair_id,
            "color": info,
            "background": background.file_name(),
            "path": background.asset_path(),
        }));
    }
    println!("{}", background.asset_path());
    println!(
        "  {} {} / {} (value {})",
        "Colour:".dimmed(),
        info.name,
        info.luminance,
        info.value
    );
    Ok(())
}

fn error_type_name(error: &Error) -> &'static str {
    error
        .downcast_ref::<CliError>()
        .map_or("Error", CliError::kind)
}
