//! flkit CLI - Command-line interface
//!
//! Commands:
//!   generate - Emit FrameLayoutKit DSL from a layout request
//!   convert  - Rewrite Auto Layout source toward FrameLayoutKit
//!   validate - Check DSL source and print a report
//!   migrate  - Estimate migration scope for Swift files
//!   config   - Show the effective project config
//!   schema   - Print JSON schemas

mod cli;

use cli::*;
use flkit::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "convert" => cmd_convert(&args[2..]),
        "validate" => cmd_validate(&args[2..]),
        "migrate" => cmd_migrate(&args[2..]),
        "config" => cmd_config(&args[2..]),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("flkit {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr, filtered by `FLKIT_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_env("FLKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() {
    println!(
        r#"
flkit - FrameLayoutKit migration assistant

USAGE:
    flkit <COMMAND> [OPTIONS]

COMMANDS:
    generate <request.json|yaml>     Generate DSL code for a layout request
    convert <file.swift>             Convert Auto Layout code toward FrameLayoutKit
    validate <file.swift>            Validate FrameLayoutKit DSL code
    migrate <dir | files...>         Analyze migration scope and print a guide
    config [show|schema]             Show effective .flkit.yaml settings
    schema [name]                    Print JSON schema (request, config, conversion, validation, guide)
    version                          Print version

OPTIONS:
    --output, -o <file>              Output file (default: stdout)
    --style <chained|statements>     Configuration style (generate)
    --no-comments                    Omit section comments (generate)
    --aggressive | --conservative    Migration strategy (convert, default: conservative)
    --level <syntax|semantic|full>   Check level (validate, default: full)
    --format <markdown|html|json>    Guide format (migrate, default: markdown)
    --json                           JSON output (convert, validate)

ENVIRONMENT:
    FLKIT_LOG                        Log filter, e.g. debug or flkit=info (default: warn)

EXAMPLES:
    flkit generate profile.yaml --style chained
    flkit convert LegacyViewController.swift --aggressive -o Converted.swift
    flkit validate ProfileView.swift --level syntax
    flkit migrate App/ --format html -o guide.html
"#
    );
}
