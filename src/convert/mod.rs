//! Legacy Auto Layout -> FrameLayoutKit conversion
//!
//! Pattern-based, not a Swift parser. Three passes run over one buffer in
//! [`PASS_ORDER`]; later passes see earlier rewrites. A pass whose trigger
//! does not match the buffer is skipped.
//!
//! ```rust,ignore
//! use flkit::{convert_legacy_source, ConversionOptions, MigrationStrategy};
//!
//! let result = convert_legacy_source(source, &ConversionOptions::default());
//! for warning in &result.warnings {
//!     eprintln!("{}", warning);
//! }
//! ```

pub mod blocks;
pub mod rules;

pub use blocks::{scan_activation_blocks, Scan, ACTIVATE_CALL};
pub use rules::{Advisory, Classification, PatternRule, Rewrite};

use crate::util::{line_indent, line_of, preview};
use regex::{Captures, Regex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Marker placed above activation blocks kept for manual review
pub const REVIEW_MARKER: &str = "// TODO: Convert to FrameLayoutKit";

/// Left in place of an activation block removed without an equivalent
pub const REMOVED_MARKER: &str =
    "// FrameLayoutKit: constraint block removed, rebuild this layout manually";

const PREVIEW_CHARS: usize = 50;

/// Conversion passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// `NSLayoutConstraint.activate(...)` blocks
    Constraints,
    /// `UIStackView` declarations and arranged subviews
    Containers,
    /// Anchor constraints (suggestions only)
    Anchors,
}

/// Pass ordering contract
pub const PASS_ORDER: [Pass; 3] = [Pass::Constraints, Pass::Containers, Pass::Anchors];

static CONSTRAINTS_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NSLayoutConstraint").expect("trigger pattern must compile"));
static CONTAINERS_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"UIStackView|addArrangedSubview").expect("trigger pattern must compile")
});
static ANCHORS_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\.(top|bottom|leading|trailing|left|right|centerX|centerY|width|height)Anchor\b",
    )
    .expect("trigger pattern must compile")
});

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::Constraints => "constraints",
            Pass::Containers => "containers",
            Pass::Anchors => "anchors",
        }
    }

    /// Cheap presence check; a pass whose trigger misses is skipped
    pub fn trigger(self) -> &'static Regex {
        match self {
            Pass::Constraints => &CONSTRAINTS_TRIGGER,
            Pass::Containers => &CONTAINERS_TRIGGER,
            Pass::Anchors => &ANCHORS_TRIGGER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MigrationStrategy {
    /// Keep activation blocks behind a review marker
    #[default]
    Conservative,
    /// Replace activation blocks with the suggested layout
    Aggressive,
}

/// Conversion options; unknown fields (`preserveComments`, ...) are ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    #[serde(default)]
    pub migration_strategy: MigrationStrategy,
}

impl ConversionOptions {
    pub fn aggressive() -> Self {
        Self {
            migration_strategy: MigrationStrategy::Aggressive,
        }
    }
}

/// Read-only advice for a detected legacy pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Source of the regex that matched
    pub pattern: String,
    pub suggestion: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    /// Activation blocks found
    pub constraints_converted: usize,
    /// Stack view declarations rewritten
    pub stack_views_converted: usize,
    /// `warnings + suggestions`
    pub total_changes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub code: String,
    pub warnings: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub stats: ConversionStats,
}

/// Convert legacy layout source with the given options
pub fn convert_legacy_source(source: &str, options: &ConversionOptions) -> ConversionResult {
    LegacyConverter::new(options.clone()).convert(source)
}

/// Pattern-driven converter
#[derive(Debug, Clone, Default)]
pub struct LegacyConverter {
    options: ConversionOptions,
}

/// Accumulated pass output
#[derive(Default)]
struct Outcome {
    warnings: Vec<String>,
    suggestions: Vec<Suggestion>,
    blocks: usize,
    stack_views: usize,
}

impl LegacyConverter {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn convert(&self, source: &str) -> ConversionResult {
        let mut code = source.to_string();
        let mut outcome = Outcome::default();

        for pass in PASS_ORDER {
            if !pass.trigger().is_match(&code) {
                tracing::debug!(pass = pass.name(), "trigger missed, skipping pass");
                continue;
            }
            code = match pass {
                Pass::Constraints => self.convert_blocks(&code, &mut outcome),
                Pass::Containers | Pass::Anchors => apply_rules(pass, &code, &mut outcome),
            };
        }

        let total_changes = outcome.warnings.len() + outcome.suggestions.len();
        ConversionResult {
            code,
            warnings: outcome.warnings,
            suggestions: outcome.suggestions,
            stats: ConversionStats {
                constraints_converted: outcome.blocks,
                stack_views_converted: outcome.stack_views,
                total_changes,
            },
        }
    }

    /// Mark or replace every activation block
    fn convert_blocks(&self, code: &str, outcome: &mut Outcome) -> String {
        let mut out = String::with_capacity(code.len());
        let mut cursor = 0;

        for scan in scan_activation_blocks(code) {
            let (start, end) = match scan {
                Scan::Block { start, end } => (start, end),
                Scan::Unbalanced { start } => {
                    outcome.warnings.push(format!(
                        "Unbalanced NSLayoutConstraint.activate at line {} left unchanged: {}...",
                        line_of(code, start),
                        preview(&code[start..], PREVIEW_CHARS)
                    ));
                    break;
                }
            };

            let block = &code[start..end];
            let line = line_of(code, start);
            outcome.blocks += 1;
            out.push_str(&code[cursor..start]);

            let hint = rules::first_hint(block).and_then(|rule| {
                let caps = rule.detect.captures(block)?;
                tracing::debug!(rule = rule.id, line, "constraint hint matched");
                Some(Suggestion {
                    pattern: rule.detect.as_str().to_string(),
                    suggestion: rule.advisory.render(&caps, block).unwrap_or_default(),
                    code: rule.rewrite.apply(&caps, block),
                })
            });

            match (self.options.migration_strategy, &hint) {
                (MigrationStrategy::Aggressive, Some(suggestion)) => {
                    out.push_str(&suggestion.code);
                }
                (MigrationStrategy::Aggressive, None) => {
                    out.push_str(REMOVED_MARKER);
                    outcome.warnings.push(format!(
                        "Removed constraint block at line {} with no FrameLayoutKit equivalent: {}...",
                        line,
                        preview(block, PREVIEW_CHARS)
                    ));
                }
                (MigrationStrategy::Conservative, _) => {
                    out.push_str(REVIEW_MARKER);
                    out.push('\n');
                    out.push_str(line_indent(code, start));
                    out.push_str(block);
                    outcome.warnings.push(format!(
                        "Manual review needed for constraint conversion at line {}: {}...",
                        line,
                        preview(block, PREVIEW_CHARS)
                    ));
                }
            }

            outcome.suggestions.extend(hint);
            cursor = end;
        }

        out.push_str(&code[cursor..]);
        out
    }
}

/// Run a pass's rule registry over `code`
///
/// Container advisories become warnings, anchor advisories become
/// suggestions.
fn apply_rules(pass: Pass, code: &str, outcome: &mut Outcome) -> String {
    let mut current = code.to_string();

    for rule in rules::rules_for(pass) {
        let mut hits = 0usize;
        let mut advisories = Vec::new();
        let rewritten = rule
            .detect
            .replace_all(&current, |caps: &Captures<'_>| {
                hits += 1;
                if let Some(text) = rule.advisory.render(caps, &current) {
                    advisories.push(text);
                }
                rule.rewrite.apply(caps, &current)
            })
            .into_owned();

        if hits > 0 {
            tracing::debug!(pass = pass.name(), rule = rule.id, hits, "rule applied");
        }
        if rule.id == rules::STACK_DECLARATION {
            outcome.stack_views += hits;
        }

        match pass {
            Pass::Anchors => outcome
                .suggestions
                .extend(advisories.into_iter().map(|text| Suggestion {
                    pattern: rule.detect.as_str().to_string(),
                    code: format!("// {}", text),
                    suggestion: text,
                })),
            _ if rule.classification == Classification::NeedsReview => {
                outcome.warnings.extend(advisories)
            }
            _ => {}
        }

        current = rewritten;
    }

    current
}
