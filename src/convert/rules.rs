//! Pattern rule registry
//!
//! Rules are grouped by [`Pass`] and kept in match order. Within a group the
//! first rule that applies to a region wins. Adding a rule means adding an
//! entry here; the converter never names individual patterns.

use super::Pass;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Rule id of the stack declaration rewrite, counted in the conversion stats
pub const STACK_DECLARATION: &str = "stack-declaration";

/// Whether a rule's rewrite can be trusted without a human look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Safe,
    NeedsReview,
}

/// Replacement applied to a match
#[derive(Clone, Copy)]
pub enum Rewrite {
    /// Leave the source as is (advisory-only rules)
    Identity,
    /// `regex` replacement template (`$1 + $2`)
    Template(&'static str),
    /// Computed replacement; receives the match and the full source
    With(fn(&Captures<'_>, &str) -> String),
}

impl Rewrite {
    pub fn apply(&self, caps: &Captures<'_>, source: &str) -> String {
        match self {
            Rewrite::Identity => caps[0].to_string(),
            Rewrite::Template(template) => {
                let mut out = String::new();
                caps.expand(template, &mut out);
                out
            }
            Rewrite::With(f) => f(caps, source),
        }
    }
}

/// Advisory text attached to a match
#[derive(Clone, Copy)]
pub enum Advisory {
    None,
    /// Expanded against the match captures (`$3`)
    Text(&'static str),
    With(fn(&Captures<'_>, &str) -> String),
}

impl Advisory {
    pub fn render(&self, caps: &Captures<'_>, source: &str) -> Option<String> {
        match self {
            Advisory::None => None,
            Advisory::Text(template) => {
                let mut out = String::new();
                caps.expand(template, &mut out);
                Some(out)
            }
            Advisory::With(f) => Some(f(caps, source)),
        }
    }
}

pub struct PatternRule {
    pub id: &'static str,
    pub pass: Pass,
    pub detect: Regex,
    pub rewrite: Rewrite,
    pub classification: Classification,
    pub advisory: Advisory,
}

impl PatternRule {
    fn new(
        id: &'static str,
        pass: Pass,
        pattern: &str,
        rewrite: Rewrite,
        classification: Classification,
        advisory: Advisory,
    ) -> Self {
        Self {
            id,
            pass,
            detect: Regex::new(pattern).expect("rule pattern must compile"),
            rewrite,
            classification,
            advisory,
        }
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("id", &self.id)
            .field("pass", &self.pass)
            .field("detect", &self.detect.as_str())
            .field("classification", &self.classification)
            .finish()
    }
}

/// Suggestions for the body of one activation block (best-effort)
static HINT_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    use Classification::NeedsReview;
    vec![
        PatternRule::new(
            "equal-widths",
            Pass::Constraints,
            r"widthAnchor.*equalTo.*widthAnchor",
            Rewrite::Template("DoubleFrameLayout().distribution(.equal)"),
            NeedsReview,
            Advisory::Text(
                "Equal width constraints suggest using DoubleFrameLayout with .equal distribution",
            ),
        ),
        PatternRule::new(
            "center-alignment",
            Pass::Constraints,
            r"center[XY]Anchor.*equalTo.*center[XY]Anchor",
            Rewrite::Template("FrameLayout().align(.center, .center)"),
            NeedsReview,
            Advisory::Text("Center alignment constraints can be replaced with FrameLayout alignment"),
        ),
    ]
});

static CONTAINER_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    use Classification::{NeedsReview, Safe};
    vec![
        PatternRule::new(
            STACK_DECLARATION,
            Pass::Containers,
            r"\b(let|var)(\s+)(\w+)(\s*=\s*)UIStackView\(\)",
            Rewrite::With(rewrite_stack_declaration),
            NeedsReview,
            Advisory::With(stack_declaration_warning),
        ),
        PatternRule::new(
            "distribution-fill-equally",
            Pass::Containers,
            r"\.distribution(\s*=\s*)\.fillEqually\b",
            Rewrite::Template(".distribution${1}.equal"),
            Safe,
            Advisory::None,
        ),
        PatternRule::new(
            "distribution-equal-centering",
            Pass::Containers,
            r"\.distribution(\s*=\s*)\.equalCentering\b",
            Rewrite::Template(".distribution${1}.center"),
            Safe,
            Advisory::None,
        ),
        PatternRule::new(
            "distribution-equal-spacing",
            Pass::Containers,
            r"\.distribution(\s*=\s*)\.equalSpacing\b",
            Rewrite::Template(".distribution${1}.justified"),
            Safe,
            Advisory::None,
        ),
        PatternRule::new(
            "arranged-subview",
            Pass::Containers,
            r"(\w+)\.addArrangedSubview\((\w+)\)",
            Rewrite::Template("$1 + $2"),
            Safe,
            Advisory::None,
        ),
    ]
});

static ANCHOR_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    use Classification::NeedsReview;
    vec![
        PatternRule::new(
            "center-x",
            Pass::Anchors,
            r"(\w+)\.centerXAnchor\.constraint\(equalTo:\s*([\w.]+)\.centerXAnchor\)",
            Rewrite::Identity,
            NeedsReview,
            Advisory::Text("Use .align(.center, .center) in FrameLayoutKit"),
        ),
        PatternRule::new(
            "center-y",
            Pass::Anchors,
            r"(\w+)\.centerYAnchor\.constraint\(equalTo:\s*([\w.]+)\.centerYAnchor\)",
            Rewrite::Identity,
            NeedsReview,
            Advisory::Text("Use .align(.center, .center) in FrameLayoutKit"),
        ),
        PatternRule::new(
            "top-constant",
            Pass::Anchors,
            r"(\w+)\.topAnchor\.constraint\(equalTo:\s*([\w.]+)\.topAnchor,\s*constant:\s*(-?\d+(?:\.\d+)?)\)",
            Rewrite::Identity,
            NeedsReview,
            Advisory::Text("Use .padding(top: $3) in FrameLayoutKit"),
        ),
        PatternRule::new(
            "leading-constant",
            Pass::Anchors,
            r"(\w+)\.leadingAnchor\.constraint\(equalTo:\s*([\w.]+)\.leadingAnchor,\s*constant:\s*(-?\d+(?:\.\d+)?)\)",
            Rewrite::Identity,
            NeedsReview,
            Advisory::Text("Use .padding(left: $3) in FrameLayoutKit"),
        ),
    ]
});

/// Rules for one pass, in match order
pub fn rules_for(pass: Pass) -> &'static [PatternRule] {
    match pass {
        Pass::Constraints => &HINT_RULES,
        Pass::Containers => &CONTAINER_RULES,
        Pass::Anchors => &ANCHOR_RULES,
    }
}

/// First hint rule matching an activation block body
pub fn first_hint(block: &str) -> Option<&'static PatternRule> {
    HINT_RULES.iter().find(|rule| rule.detect.is_match(block))
}

/// DSL stack kind for a `UIStackView` variable
pub fn stack_layout_for(name: &str, source: &str) -> &'static str {
    let horizontal = format!(r"\b{}\.axis\s*=\s*\.horizontal\b", regex::escape(name));
    match Regex::new(&horizontal) {
        Ok(re) if re.is_match(source) => "HStackLayout",
        _ => "VStackLayout",
    }
}

fn rewrite_stack_declaration(caps: &Captures<'_>, source: &str) -> String {
    format!(
        "{}{}{}{}{}()",
        &caps[1],
        &caps[2],
        &caps[3],
        &caps[4],
        stack_layout_for(&caps[3], source)
    )
}

fn stack_declaration_warning(caps: &Captures<'_>, source: &str) -> String {
    format!(
        "Converted UIStackView '{}' to {}. Review axis and distribution settings.",
        &caps[3],
        stack_layout_for(&caps[3], source)
    )
}
