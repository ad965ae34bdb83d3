//! FrameLayoutKit source validation
//!
//! Classifies DSL source into errors, warnings and suggestions using the
//! table in [`rules`]. `is_valid` depends on errors only.

pub mod rules;

pub use rules::{RuleClass, ValidationRule, CHAIN_METHODS};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// Which rule classes to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    Syntax,
    Semantic,
    #[default]
    Full,
}

impl CheckLevel {
    fn runs(self, class: RuleClass) -> bool {
        match self {
            CheckLevel::Syntax => class.is_syntax(),
            CheckLevel::Semantic => !class.is_syntax(),
            CheckLevel::Full => true,
        }
    }
}

impl FromStr for CheckLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "syntax" => Ok(CheckLevel::Syntax),
            "semantic" => Ok(CheckLevel::Semantic),
            "full" => Ok(CheckLevel::Full),
            other => Err(crate::Error::Request(format!(
                "unknown check level '{}', expected syntax, semantic or full",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    /// Rule code (`FLK010`)
    pub code: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub suggestions: Vec<Diagnostic>,
    /// Markdown report
    pub report: String,
}

impl ValidationResult {
    /// Messages of all errors, in report order
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn suggestion_messages(&self) -> Vec<&str> {
        self.suggestions.iter().map(|d| d.message.as_str()).collect()
    }
}

/// Validate FrameLayoutKit source at the given level
pub fn validate_source(source: &str, level: CheckLevel) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    for rule in rules::rules().iter().filter(|rule| level.runs(rule.class)) {
        for message in rule.check(source) {
            tracing::debug!(rule = rule.code, "validation rule fired");
            let diagnostic = Diagnostic {
                code: rule.code.to_string(),
                severity: rule.severity,
                message,
            };
            match rule.severity {
                Severity::Error => errors.push(diagnostic),
                Severity::Warning => warnings.push(diagnostic),
                Severity::Suggestion => suggestions.push(diagnostic),
            }
        }
    }

    let report = render_report(&errors, &warnings, &suggestions);
    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
        report,
    }
}

/// Render the markdown report
pub fn render_report(
    errors: &[Diagnostic],
    warnings: &[Diagnostic],
    suggestions: &[Diagnostic],
) -> String {
    let mut report = String::from("# FrameLayoutKit Validation Report\n\n");

    if errors.is_empty() {
        report.push_str("✅ **No syntax errors found**\n\n");
    } else {
        let _ = write!(report, "❌ **{} Errors Found:**\n\n", errors.len());
        numbered(&mut report, errors);
        report.push('\n');
    }

    if !warnings.is_empty() {
        let _ = write!(report, "⚠️ **{} Warnings:**\n\n", warnings.len());
        numbered(&mut report, warnings);
        report.push('\n');
    }

    if !suggestions.is_empty() {
        let _ = write!(report, "💡 **{} Suggestions:**\n\n", suggestions.len());
        numbered(&mut report, suggestions);
    }

    report
}

fn numbered(report: &mut String, items: &[Diagnostic]) {
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(report, "{}. {}", index + 1, item.message);
    }
}
