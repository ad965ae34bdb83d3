//! Validation CLI command

use super::util::{has_flag, load_tool_config, parse_flag_value, positional_args, read_input};
use flkit::*;

pub fn cmd_validate(args: &[String]) -> Result<()> {
    let Some(source_path) = positional_args(args).first().copied() else {
        return Err("Usage: flkit validate <file.swift> [--level syntax|semantic|full] [--json]".into());
    };

    let level = match parse_flag_value(args, "--level", None) {
        Some(level) => level.parse()?,
        None => load_tool_config()?.check_level(),
    };

    let source = read_input(source_path)?;
    let result = validate_source(&source, level);

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.report.trim_end());
    }

    if result.is_valid {
        Ok(())
    } else {
        Err(format!("Validation failed with {} error(s)", result.errors.len()).into())
    }
}
