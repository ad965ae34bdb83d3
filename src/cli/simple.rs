//! Simple CLI commands: generate, convert, migrate

use super::util::{
    has_flag, load_tool_config, parse_flag_value, parse_output_arg, positional_args, read_input,
    write_output,
};
use flkit::*;
use std::path::{Path, PathBuf};

pub fn cmd_generate(args: &[String]) -> Result<()> {
    let Some(request_path) = positional_args(args).first().copied() else {
        return Err(
            "Usage: flkit generate <request.json|yaml> [--style chained|statements] [--no-comments] [--output <file>]"
                .into(),
        );
    };

    let content = read_input(request_path)?;
    let request = if is_yaml(request_path) {
        GenerateRequest::from_yaml(&content)?
    } else {
        GenerateRequest::from_json(&content)?
    };

    let mut config = load_tool_config()?.generate_config();
    if let Some(style) = parse_flag_value(args, "--style", None) {
        config.style = Some(style.parse()?);
    }
    if has_flag(args, "--no-comments") {
        config.comments = false;
    }

    let code = LayoutGenerator::with_config(config).generate(
        request.layout_type,
        &request.views,
        &request.configuration,
    )?;

    write_output(&parse_output_arg(args), &code)
}

pub fn cmd_convert(args: &[String]) -> Result<()> {
    let Some(source_path) = positional_args(args).first().copied() else {
        return Err(
            "Usage: flkit convert <file.swift> [--aggressive|--conservative] [--json] [--output <file>]"
                .into(),
        );
    };

    let source = read_input(source_path)?;
    let mut options = load_tool_config()?.conversion_options();
    if has_flag(args, "--aggressive") {
        options.migration_strategy = MigrationStrategy::Aggressive;
    } else if has_flag(args, "--conservative") {
        options.migration_strategy = MigrationStrategy::Conservative;
    }

    let result = convert_legacy_source(&source, &options);
    let output = parse_output_arg(args);

    if has_flag(args, "--json") {
        return write_output(&output, &serde_json::to_string_pretty(&result)?);
    }

    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }
    for suggestion in &result.suggestions {
        eprintln!("suggestion: {}", suggestion.suggestion);
    }
    eprintln!(
        "{} constraint block(s), {} stack view(s), {} change(s)",
        result.stats.constraints_converted,
        result.stats.stack_views_converted,
        result.stats.total_changes
    );

    write_output(&output, &result.code)
}

pub fn cmd_migrate(args: &[String]) -> Result<()> {
    let targets = positional_args(args);
    if targets.is_empty() {
        return Err(
            "Usage: flkit migrate <dir | files...> [--format markdown|html|json] [--output <file>]"
                .into(),
        );
    }

    let format = match parse_flag_value(args, "--format", None) {
        Some(f) => f.parse()?,
        None => OutputFormat::default(),
    };

    let input = match targets.as_slice() {
        [dir] if Path::new(dir).is_dir() => MigrationInput::Project(PathBuf::from(dir)),
        files => MigrationInput::Files(files.iter().map(PathBuf::from).collect()),
    };

    let analysis = analyze_migration_scope(&input, format)?;
    eprintln!(
        "{} file(s), complexity {}, estimated effort {}",
        analysis.guide.file_count, analysis.guide.complexity, analysis.guide.estimated_effort
    );

    write_output(&parse_output_arg(args), &analysis.rendered)
}

fn is_yaml(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}
