//! Config and schema CLI commands

use super::util::load_tool_config;
use flkit::*;

pub fn cmd_config(args: &[String]) -> Result<()> {
    match args.first().map(|s| s.as_str()).unwrap_or("show") {
        "show" => {
            let config = load_tool_config()?;
            println!("{}", serde_norway::to_string(&config)?.trim_end());
            Ok(())
        }
        "schema" => print_schema::<ToolConfig>(),
        cmd => Err(format!("Unknown config subcommand: {}. Use 'show' or 'schema'.", cmd).into()),
    }
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: request, config, conversion, validation, guide");
            Ok(())
        }
        "request" => print_schema::<GenerateRequest>(),
        "config" => print_schema::<ToolConfig>(),
        "conversion" => print_schema::<ConversionResult>(),
        "validation" => print_schema::<ValidationResult>(),
        "guide" => print_schema::<MigrationGuide>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
