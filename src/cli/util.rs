//! CLI utility helpers

use flkit::{Error, Result, ToolConfig};
use std::fs;
use std::path::PathBuf;

/// Flags that consume the following argument
const VALUE_FLAGS: [&str; 5] = ["--output", "-o", "--format", "--level", "--style"];

/// Value following `long` or `short`
pub fn parse_flag_value<'a>(args: &'a [String], long: &str, short: Option<&str>) -> Option<&'a str> {
    for (i, arg) in args.iter().enumerate() {
        if arg == long || Some(arg.as_str()) == short {
            return args.get(i + 1).map(String::as_str);
        }
    }
    None
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    parse_flag_value(args, "--output", Some("-o")).map(PathBuf::from)
}

/// Arguments that are neither flags nor flag values
pub fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut skip_next = false;

    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
        } else if !arg.starts_with('-') {
            positional.push(arg.as_str());
        }
    }

    positional
}

/// Nearest `.flkit.yaml` from the working directory, or built-in defaults
pub fn load_tool_config() -> Result<ToolConfig> {
    let current_dir = std::env::current_dir().map_err(Error::Io)?;
    match ToolConfig::find(&current_dir)? {
        Some((path, config)) => {
            tracing::info!(path = %path.display(), "using project config");
            Ok(config)
        }
        None => Ok(ToolConfig::default()),
    }
}

/// Read a source file argument
pub fn read_input(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(Error::Io)
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content.trim_end());
        }
    }
    Ok(())
}
