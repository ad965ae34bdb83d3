//! Migration scope analysis
//!
//! Scans Swift sources for legacy layout constructs, derives a complexity
//! estimate and recommendations, and renders the migration guide.

use crate::convert::{scan_activation_blocks, Pass, Scan, PASS_ORDER};
use crate::error::{Error, Result};
use crate::templates;
use chrono::{DateTime, Utc};
use minijinja::context;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

/// Directory names never scanned
pub const SKIPPED_DIRS: [&str; 4] = ["Pods", "Carthage", "build", "DerivedData"];

const ANCHOR_HEAVY: usize = 10;

static ANCHOR_CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?:top|bottom|leading|trailing|left|right|centerX|centerY|width|height)Anchor\.constraint\(")
        .expect("anchor pattern must compile")
});
static STACK_VIEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bUIStackView\(").expect("stack pattern must compile"));
static ARRANGED_SUBVIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.addArrangedSubview\(").expect("arranged pattern must compile")
});

/// What to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationInput {
    /// Every `.swift` file under a directory
    Project(PathBuf),
    /// An explicit file list
    Files(Vec<PathBuf>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Request(format!(
                "unknown output format '{}', expected markdown, html or json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Weighted score: activation blocks x3, anchors x1, stack views x1
    pub fn from_score(score: usize) -> Self {
        match score {
            0..=20 => Complexity::Low,
            21..=100 => Complexity::Medium,
            _ => Complexity::High,
        }
    }

    pub fn estimated_effort(self) -> &'static str {
        match self {
            Complexity::Low => "2-4 days",
            Complexity::Medium => "2-3 weeks",
            Complexity::High => "1-2 months",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        })
    }
}

/// Legacy construct counts for one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileScope {
    pub path: String,
    pub constraint_blocks: usize,
    pub anchor_constraints: usize,
    pub stack_views: usize,
    pub arranged_subviews: usize,
}

impl FileScope {
    pub fn score(&self) -> usize {
        self.constraint_blocks * 3 + self.anchor_constraints + self.stack_views
    }

    fn is_view_controller(&self) -> bool {
        Path::new(&self.path)
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains("ViewController"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MigrationGuide {
    pub complexity: Complexity,
    pub estimated_effort: String,
    pub file_count: usize,
    pub recommendations: Vec<String>,
    pub files: Vec<FileScope>,
    #[schemars(with = "String")]
    pub generated_at: DateTime<Utc>,
}

/// Guide data plus its rendering in the requested format
#[derive(Debug, Clone)]
pub struct MigrationAnalysis {
    pub guide: MigrationGuide,
    pub format: OutputFormat,
    pub rendered: String,
}

/// Count legacy constructs in one source text
pub fn analyze_source(path: impl Into<String>, source: &str) -> FileScope {
    let mut scope = FileScope {
        path: path.into(),
        ..Default::default()
    };
    if !PASS_ORDER.iter().any(|pass| pass.trigger().is_match(source)) {
        return scope;
    }

    if Pass::Constraints.trigger().is_match(source) {
        scope.constraint_blocks = scan_activation_blocks(source)
            .iter()
            .filter(|scan| matches!(scan, Scan::Block { .. }))
            .count();
    }
    scope.anchor_constraints = ANCHOR_CONSTRAINT.find_iter(source).count();
    scope.stack_views = STACK_VIEW.find_iter(source).count();
    scope.arranged_subviews = ARRANGED_SUBVIEW.find_iter(source).count();
    scope
}

/// Aggregate file scopes into a guide
pub fn build_guide(files: Vec<FileScope>) -> MigrationGuide {
    let score: usize = files.iter().map(FileScope::score).sum();
    let complexity = Complexity::from_score(score);

    let mut recommendations =
        vec!["Start with view controllers that use simple layouts".to_string()];
    if files.iter().any(|f| f.stack_views > 0) {
        recommendations.push(
            "Migrate UIStackView usage first as it maps well to StackFrameLayout".to_string(),
        );
    }
    for file in &files {
        if file.is_view_controller() && file.constraint_blocks == 0 {
            recommendations.push(format!("{}: Good candidate for migration", file.path));
        }
        if file.anchor_constraints > ANCHOR_HEAVY {
            recommendations.push(format!(
                "{}: heavy anchor usage ({} constraints), plan for manual review",
                file.path, file.anchor_constraints
            ));
        }
    }

    MigrationGuide {
        complexity,
        estimated_effort: complexity.estimated_effort().to_string(),
        file_count: files.len(),
        recommendations,
        files,
        generated_at: Utc::now(),
    }
}

/// Render a guide in `format`
pub fn render_guide(guide: &MigrationGuide, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(templates::render(
            templates::GUIDE_MARKDOWN,
            context! { guide => guide },
        )?),
        OutputFormat::Html => Ok(templates::render(
            templates::GUIDE_HTML,
            context! { guide => guide },
        )?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(guide)?),
    }
}

/// Analyze a project directory or file list and render the guide
pub fn analyze_migration_scope(
    input: &MigrationInput,
    format: OutputFormat,
) -> Result<MigrationAnalysis> {
    let files = match input {
        MigrationInput::Project(root) => {
            let mut paths = Vec::new();
            collect_swift_files(root, &mut paths)?;
            paths.sort();
            paths
                .iter()
                .map(|path| {
                    let display = path.strip_prefix(root).unwrap_or(path.as_path());
                    scan_file(path, display)
                })
                .collect()
        }
        MigrationInput::Files(paths) => paths.iter().map(|p| scan_file(p, p)).collect(),
    };

    let guide = build_guide(files);
    tracing::debug!(
        files = guide.file_count,
        complexity = %guide.complexity,
        "migration scope analyzed"
    );
    let rendered = render_guide(&guide, format)?;

    Ok(MigrationAnalysis {
        guide,
        format,
        rendered,
    })
}

fn scan_file(path: &Path, display: &Path) -> FileScope {
    let display = display.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(source) => analyze_source(display, &source),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read file, counting it with no legacy usage");
            FileScope {
                path: display,
                ..Default::default()
            }
        }
    }
}

fn collect_swift_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(Error::Io)?;

    for entry in entries {
        let entry = entry.map_err(Error::Io)?;
        let path = entry.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if path.is_dir() {
            if name.starts_with('.') || SKIPPED_DIRS.contains(&name) {
                continue;
            }
            if let Err(e) = collect_swift_files(&path, files) {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable directory");
            }
        } else if path.extension().is_some_and(|ext| ext == "swift") {
            files.push(path);
        }
    }

    Ok(())
}
