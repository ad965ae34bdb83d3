//! Validation rule table
//!
//! Each rule is independent; a source text can trigger any subset. Rules run
//! in table order, which is also the order diagnostics are reported in.
//! The semantic rules are substring and adjacency heuristics, not analysis,
//! and can produce false positives and negatives.

use super::Severity;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Methods that may follow `).` in a builder chain
pub const CHAIN_METHODS: [&str; 14] = [
    "padding",
    "align",
    "fixedSize",
    "spacing",
    "distribution",
    "axis",
    "rows",
    "columns",
    "debug",
    "flexible",
    "minSize",
    "maxSize",
    "interItemSpacing",
    "lineSpacing",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleClass {
    ForbiddenConstruct,
    MalformedOperator,
    InvalidChain,
    SuspiciousConfig,
}

impl RuleClass {
    /// Syntax-level classes run for `syntax` and `full`, the rest for
    /// `semantic` and `full`
    pub fn is_syntax(self) -> bool {
        !matches!(self, RuleClass::SuspiciousConfig)
    }
}

pub enum Detector {
    /// Fires once when the pattern matches anywhere
    Presence(Regex),
    /// Returns one message per finding
    Custom(fn(&str) -> Vec<String>),
}

pub struct ValidationRule {
    pub code: &'static str,
    pub class: RuleClass,
    pub severity: Severity,
    /// Message for presence rules, description for custom ones
    pub message: &'static str,
    pub detect: Detector,
}

impl ValidationRule {
    /// Messages this rule produces for `source`
    pub fn check(&self, source: &str) -> Vec<String> {
        match &self.detect {
            Detector::Presence(re) if re.is_match(source) => vec![self.message.to_string()],
            Detector::Presence(_) => Vec::new(),
            Detector::Custom(f) => f(source),
        }
    }
}

fn presence(pattern: &str) -> Detector {
    Detector::Presence(Regex::new(pattern).expect("validation pattern must compile"))
}

static RULES: LazyLock<Vec<ValidationRule>> = LazyLock::new(|| {
    use RuleClass::*;
    use Severity::*;
    vec![
        ValidationRule {
            code: "FLK001",
            class: ForbiddenConstruct,
            severity: Error,
            message: "NSLayoutConstraint is not allowed in FrameLayoutKit code. Replace constraint activation with a FrameLayoutKit layout.",
            detect: presence(r"\bNSLayoutConstraint\b"),
        },
        ValidationRule {
            code: "FLK002",
            class: ForbiddenConstruct,
            severity: Error,
            message: "Layout anchors are not allowed in FrameLayoutKit code. Use padding and align instead.",
            detect: presence(
                r"\.(top|bottom|leading|trailing|left|right|centerX|centerY|width|height|firstBaseline|lastBaseline)Anchor\b",
            ),
        },
        ValidationRule {
            code: "FLK003",
            class: ForbiddenConstruct,
            severity: Error,
            message: "Constraint method calls are not allowed in FrameLayoutKit code.",
            detect: presence(r"\.(constraint|addConstraints?)\("),
        },
        ValidationRule {
            code: "FLK004",
            class: ForbiddenConstruct,
            severity: Error,
            message: "translatesAutoresizingMaskIntoConstraints is not needed with FrameLayoutKit.",
            detect: presence(r"\btranslatesAutoresizingMaskIntoConstraints\b"),
        },
        ValidationRule {
            code: "FLK010",
            class: MalformedOperator,
            severity: Error,
            message: "Double + operator detected. Each + should have a view on both sides.",
            detect: presence(r"\+[ \t]*\+"),
        },
        ValidationRule {
            code: "FLK011",
            class: MalformedOperator,
            severity: Error,
            message: "Multiple <+ operators. DoubleFrameLayout can only have one left view.",
            detect: Detector::Custom(multiple_left_binds),
        },
        ValidationRule {
            code: "FLK012",
            class: MalformedOperator,
            severity: Error,
            message: "Multiple +> operators. DoubleFrameLayout can only have one right view.",
            detect: Detector::Custom(multiple_right_binds),
        },
        ValidationRule {
            code: "FLK020",
            class: InvalidChain,
            severity: Error,
            message: "Invalid chain method",
            detect: Detector::Custom(invalid_chains),
        },
        ValidationRule {
            code: "FLK030",
            class: SuspiciousConfig,
            severity: Warning,
            message: "GridFrameLayout has empty views array",
            detect: presence(r"(?s)GridFrameLayout.*\.views\s*=\s*\[\s*\]"),
        },
        ValidationRule {
            code: "FLK031",
            class: SuspiciousConfig,
            severity: Warning,
            message: "DoubleFrameLayout should only contain 2 views, but more were added",
            detect: Detector::Custom(overfilled_double_frames),
        },
        ValidationRule {
            code: "FLK032",
            class: SuspiciousConfig,
            severity: Suggestion,
            message: "When using .justified distribution, consider setting isJustified = true",
            detect: Detector::Custom(justified_without_flag),
        },
        ValidationRule {
            code: "FLK033",
            class: SuspiciousConfig,
            severity: Suggestion,
            message: "Horizontal ScrollStackView has large height. Consider reducing for better UX.",
            detect: presence(
                r"(?s)ScrollStackView.*axis(?:\s*=\s*|\(\s*)\.horizontal.*frame\.(?:size\.)?height\s*=\s*\d{3,}",
            ),
        },
    ]
});

/// The full rule table, in report order
pub fn rules() -> &'static [ValidationRule] {
    &RULES
}

fn rule_message(code: &str) -> &'static str {
    RULES
        .iter()
        .find(|rule| rule.code == code)
        .map(|rule| rule.message)
        .unwrap_or_default()
}

static LEFT_BIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w[\w.]*)[ \t]*<\+").expect("bind pattern must compile"));
static RIGHT_BIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w[\w.]*)[ \t]*\+>").expect("bind pattern must compile"));

/// Receivers used more than once with `re`
fn repeated_receivers(re: &Regex, source: &str) -> usize {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for caps in re.captures_iter(source) {
        if let Some(receiver) = caps.get(1) {
            *counts.entry(receiver.as_str()).or_default() += 1;
        }
    }
    counts.values().filter(|&&n| n > 1).count()
}

/// Whether some line uses `op` more than once, as in `d <+ a <+ b`
fn chained_on_one_line(op: &str, source: &str) -> bool {
    source.lines().any(|line| {
        let code = line.split("//").next().unwrap_or_default();
        code.matches(op).count() > 1
    })
}

fn multiple_left_binds(source: &str) -> Vec<String> {
    if repeated_receivers(&LEFT_BIND, source) > 0 || chained_on_one_line("<+", source) {
        vec![rule_message("FLK011").to_string()]
    } else {
        Vec::new()
    }
}

fn multiple_right_binds(source: &str) -> Vec<String> {
    if repeated_receivers(&RIGHT_BIND, source) > 0 || chained_on_one_line("+>", source) {
        vec![rule_message("FLK012").to_string()]
    } else {
        Vec::new()
    }
}

static CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*\.\s*(\w+)\s*\(").expect("chain pattern must compile"));

fn invalid_chains(source: &str) -> Vec<String> {
    CHAIN
        .captures_iter(source)
        .filter(|caps| !CHAIN_METHODS.contains(&&caps[1]))
        .map(|caps| {
            let fragment: String = caps[0].chars().filter(|c| !c.is_whitespace()).collect();
            format!("Invalid chain method: {}", fragment)
        })
        .collect()
}

static DOUBLE_FRAME_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:let|var)\s+(\w+)\s*=\s*DoubleFrameLayout\(")
        .expect("declaration pattern must compile")
});

fn overfilled_double_frames(source: &str) -> Vec<String> {
    DOUBLE_FRAME_DECL
        .captures_iter(source)
        .filter(|caps| {
            let attach = format!(r"\b{}[ \t]*(?:<\+|\+>|\+)[ \t]*\w", regex::escape(&caps[1]));
            Regex::new(&attach)
                .map(|re| re.find_iter(source).count() > 2)
                .unwrap_or(false)
        })
        .map(|_| rule_message("FLK031").to_string())
        .collect()
}

static JUSTIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"distribution(?:\s*=\s*|\(\s*)\.justified\b").expect("pattern must compile")
});
static JUSTIFIED_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"isJustified\s*=\s*true").expect("pattern must compile"));

fn justified_without_flag(source: &str) -> Vec<String> {
    if JUSTIFIED.is_match(source) && !JUSTIFIED_FLAG.is_match(source) {
        vec![rule_message("FLK032").to_string()]
    } else {
        Vec::new()
    }
}
