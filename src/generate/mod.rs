//! Layout generation: layout description -> FrameLayoutKit source
//!
//! Every kind emits the same three sections:
//!
//! 1. the layout declaration plus its configuration facets
//! 2. one `let <name> = ...` per view (via [`crate::factory`])
//! 3. the attach statements (`+`, `<+`/`+>`, or the grid array)
//!
//! Output is a pure function of the input: identical requests produce
//! byte-identical source.

pub mod facets;

pub use facets::{facets_for, padding_args, Facet, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS};

use crate::error::{Error, Result};
use crate::factory::create_view;
use crate::model::{LayoutConfig, LayoutKind, ViewSpec};
use crate::util::{format_number, is_swift_identifier};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Generate layout source with the default [`GenerateConfig`]
pub fn generate_layout(
    kind: LayoutKind,
    views: &[ViewSpec],
    config: &LayoutConfig,
) -> Result<String> {
    LayoutGenerator::new().generate(kind, views, config)
}

/// How configuration facets are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConfigStyle {
    /// `stackLayout.spacing = 8`
    Statements,
    /// `let rowLayout = FrameLayout()\n    .padding(20)`
    Chained,
}

impl std::str::FromStr for ConfigStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "statements" => Ok(ConfigStyle::Statements),
            "chained" => Ok(ConfigStyle::Chained),
            other => Err(Error::Request(format!(
                "unknown style '{}', expected statements or chained",
                other
            ))),
        }
    }
}

impl ConfigStyle {
    pub fn default_for(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::SingleFrame => ConfigStyle::Chained,
            _ => ConfigStyle::Statements,
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Emit section comments (`// Add views to stack`)
    pub comments: bool,
    /// Force a facet style; `None` uses [`ConfigStyle::default_for`]
    pub style: Option<ConfigStyle>,
    /// Filler spacing between stack views when no spacing is configured
    pub default_spacing: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            comments: true,
            style: None,
            default_spacing: 8.0,
        }
    }
}

/// Layout source generator
#[derive(Debug, Clone, Default)]
pub struct LayoutGenerator {
    config: GenerateConfig,
}

impl LayoutGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GenerateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Generate the complete source for one layout
    pub fn generate(
        &self,
        kind: LayoutKind,
        views: &[ViewSpec],
        layout: &LayoutConfig,
    ) -> Result<String> {
        let views = check_views(kind, views)?;
        let target = layout_binding(kind, views);

        tracing::debug!(%kind, views = views.len(), target = %target, "generating layout");

        let mut out = Output::new(self.config.comments);
        self.declare(&mut out, kind, &target, layout);

        match kind {
            LayoutKind::DoubleFrame => {
                out.section("Create views");
                for view in views {
                    out.declare_view(view);
                }
                out.section("Assign views using operators");
                out.line(format!("{} <+ {}", target, views[0].name));
                out.line(format!("{} +> {}", target, views[1].name));
            }
            LayoutKind::Grid => {
                out.section("Create views");
                out.line("var gridViews: [UIView] = []");
                for view in views {
                    out.declare_view(view);
                    out.line(format!("gridViews.append({})", view.name));
                }
                out.section("Assign views to grid");
                out.line(format!("{}.views = gridViews", target));
            }
            _ => {
                out.section(attach_comment(kind));
                let filler = kind.is_stack() && layout.spacing.is_none();
                for (index, view) in views.iter().enumerate() {
                    out.declare_view(view);
                    out.line(format!("{} + {}", target, view.name));
                    if filler && index + 1 < views.len() {
                        out.line(format!(
                            "{} + {} // Default spacing",
                            target,
                            format_number(self.config.default_spacing)
                        ));
                    }
                }
            }
        }

        Ok(out.finish())
    }

    fn declare(&self, out: &mut Output, kind: LayoutKind, target: &str, layout: &LayoutConfig) {
        let facets = facets_for(kind, layout);
        let declaration = format!("let {} = {}()", target, kind.type_name());
        let style = self.config.style.unwrap_or(ConfigStyle::default_for(kind));

        match style {
            ConfigStyle::Statements => {
                out.line(declaration);
                for facet in &facets {
                    out.lines(facet.statements(target));
                }
            }
            ConfigStyle::Chained => {
                out.line(declaration);
                let mut rest = Vec::new();
                for facet in &facets {
                    match facet.chain_call() {
                        Some(call) => out.line(format!("    {}", call)),
                        None => rest.push(facet),
                    }
                }
                for facet in rest {
                    out.lines(facet.statements(target));
                }
            }
        }
    }
}

/// Validate the view list and return the views the layout consumes
fn check_views(kind: LayoutKind, views: &[ViewSpec]) -> Result<&[ViewSpec]> {
    let arity = kind.arity();
    if !arity.accepts(views.len()) {
        return Err(Error::InvalidArity {
            kind,
            expected: arity,
            actual: views.len(),
        });
    }

    let consumed = if kind == LayoutKind::SingleFrame {
        if views.len() > 1 {
            tracing::debug!(ignored = views.len() - 1, "FrameLayout uses only the first view");
        }
        &views[..1]
    } else {
        views
    };

    let target = layout_binding(kind, consumed);
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(&target);
    if kind == LayoutKind::Grid {
        seen.insert("gridViews");
    }

    for view in consumed {
        if !is_swift_identifier(&view.name) {
            return Err(Error::InvalidIdentifier(view.name.clone()));
        }
        if !seen.insert(&view.name) {
            return Err(Error::DuplicateView(view.name.clone()));
        }
    }

    Ok(consumed)
}

/// Name of the layout variable
fn layout_binding(kind: LayoutKind, views: &[ViewSpec]) -> String {
    match kind {
        LayoutKind::SingleFrame => match views.first() {
            Some(view) => format!("{}Layout", view.name),
            None => "frameLayout".to_string(),
        },
        LayoutKind::VStack | LayoutKind::HStack => "stackLayout".to_string(),
        LayoutKind::ZStack => "zStackLayout".to_string(),
        LayoutKind::DoubleFrame => "doubleLayout".to_string(),
        LayoutKind::Grid => "gridLayout".to_string(),
        LayoutKind::ScrollStack => "scrollStack".to_string(),
        LayoutKind::Flow => "flowLayout".to_string(),
    }
}

fn attach_comment(kind: LayoutKind) -> &'static str {
    match kind {
        LayoutKind::ScrollStack => "Add views to scroll stack",
        LayoutKind::Flow => "Add views to flow layout",
        LayoutKind::ZStack => "Add overlapping views",
        LayoutKind::SingleFrame => "Add view",
        _ => "Add views to stack",
    }
}

/// Line buffer for generated source
struct Output {
    lines: Vec<String>,
    comments: bool,
}

impl Output {
    fn new(comments: bool) -> Self {
        Self {
            lines: Vec::new(),
            comments,
        }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn lines(&mut self, lines: Vec<String>) {
        self.lines.extend(lines);
    }

    fn section(&mut self, comment: &str) {
        self.lines.push(String::new());
        if self.comments {
            self.lines.push(format!("// {}", comment));
        }
    }

    fn declare_view(&mut self, view: &ViewSpec) {
        self.lines
            .push(format!("let {} = {}", view.name, create_view(view)));
    }

    fn finish(self) -> String {
        let mut code = self.lines.join("\n");
        code.push('\n');
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Axis, Distribution, Padding};
    use pretty_assertions::assert_eq;

    fn views(names: &[&str]) -> Vec<ViewSpec> {
        names.iter().map(|n| ViewSpec::new(*n, "UILabel")).collect()
    }

    #[test]
    fn test_vstack_with_spacing() {
        let config = LayoutConfig {
            spacing: Some(8.0),
            ..Default::default()
        };
        let code = generate_layout(
            LayoutKind::VStack,
            &[ViewSpec::new("a", "UILabel").with_text("Hi")],
            &config,
        )
        .unwrap();

        assert_eq!(
            code,
            "let stackLayout = VStackLayout()\n\
             stackLayout.spacing = 8\n\
             \n\
             // Add views to stack\n\
             let a = {\n    let label = UILabel()\n    label.text = \"Hi\"\n    return label\n}()\n\
             stackLayout + a\n"
        );
    }

    #[test]
    fn test_stack_filler_between_views() {
        let code =
            generate_layout(LayoutKind::HStack, &views(&["a", "b", "c"]), &LayoutConfig::default())
                .unwrap();
        assert_eq!(code.matches("stackLayout + 8 // Default spacing").count(), 2);
        assert!(code.ends_with("stackLayout + c\n"));
    }

    #[test]
    fn test_single_frame_chained_by_default() {
        let config = LayoutConfig {
            padding: Some(Padding::Uniform(20.0)),
            alignment: Some(Alignment::default()),
            ..Default::default()
        };
        let code = generate_layout(LayoutKind::SingleFrame, &views(&["title"]), &config).unwrap();
        assert_eq!(
            code,
            "let titleLayout = FrameLayout()\n    .padding(20)\n    .align(.center, .center)\n\n// Add view\nlet title = UILabel()\ntitleLayout + title\n"
        );
    }

    #[test]
    fn test_single_frame_ignores_extra_views() {
        let code =
            generate_layout(LayoutKind::SingleFrame, &views(&["a", "b"]), &LayoutConfig::default())
                .unwrap();
        assert!(code.contains("aLayout + a"));
        assert!(!code.contains("let b"));
    }

    #[test]
    fn test_double_frame_operators_and_panes() {
        let config = LayoutConfig {
            axis: Some(Axis::Horizontal),
            padding: Some(Padding::Uniform(4.0)),
            is_overlapped: Some(true),
            ..Default::default()
        };
        let code =
            generate_layout(LayoutKind::DoubleFrame, &views(&["left", "right"]), &config).unwrap();
        assert_eq!(
            code,
            "let doubleLayout = DoubleFrameLayout()\n\
             doubleLayout.axis = .horizontal\n\
             doubleLayout.leftFrameLayout.padding(4)\n\
             doubleLayout.rightFrameLayout.padding(4)\n\
             doubleLayout.isOverlapped = true\n\
             \n\
             // Create views\n\
             let left = UILabel()\n\
             let right = UILabel()\n\
             \n\
             // Assign views using operators\n\
             doubleLayout <+ left\n\
             doubleLayout +> right\n"
        );
    }

    #[test]
    fn test_chained_style_keeps_unchainable_facets_as_statements() {
        let generator = LayoutGenerator::with_config(GenerateConfig {
            style: Some(ConfigStyle::Chained),
            ..Default::default()
        });
        let config = LayoutConfig {
            spacing: Some(6.0),
            distribution: Some(Distribution::Equal),
            padding: Some(Padding::Uniform(2.0)),
            ..Default::default()
        };
        let code = generator
            .generate(LayoutKind::DoubleFrame, &views(&["a", "b"]), &config)
            .unwrap();
        assert!(code.starts_with(
            "let doubleLayout = DoubleFrameLayout()\n    .spacing(6)\n    .distribution(.equal)\ndoubleLayout.leftFrameLayout.padding(2)\n"
        ));
    }

    #[test]
    fn test_grid_array_idiom() {
        let code =
            generate_layout(LayoutKind::Grid, &views(&["x", "y"]), &LayoutConfig::default()).unwrap();
        assert_eq!(
            code,
            "let gridLayout = GridFrameLayout()\n\
             gridLayout.rows = 2\n\
             gridLayout.columns = 3\n\
             \n\
             // Create views\n\
             var gridViews: [UIView] = []\n\
             let x = UILabel()\n\
             gridViews.append(x)\n\
             let y = UILabel()\n\
             gridViews.append(y)\n\
             \n\
             // Assign views to grid\n\
             gridLayout.views = gridViews\n"
        );
    }

    #[test]
    fn test_without_comments() {
        let generator = LayoutGenerator::with_config(GenerateConfig {
            comments: false,
            ..Default::default()
        });
        let code = generator
            .generate(LayoutKind::Flow, &views(&["tag"]), &LayoutConfig::default())
            .unwrap();
        assert_eq!(code, "let flowLayout = FlowFrameLayout()\n\nlet tag = UILabel()\nflowLayout + tag\n");
    }

    #[test]
    fn test_arity_errors() {
        let err = generate_layout(LayoutKind::DoubleFrame, &views(&["a"]), &LayoutConfig::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "DoubleFrameLayout requires exactly 2 view(s), got 1"
        );

        let err = generate_layout(LayoutKind::SingleFrame, &[], &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArity { actual: 0, .. }));
    }

    #[test]
    fn test_name_checks() {
        let err = generate_layout(LayoutKind::VStack, &views(&["a b"]), &LayoutConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier(name) if name == "a b"));

        let err = generate_layout(LayoutKind::VStack, &views(&["a", "a"]), &LayoutConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateView(name) if name == "a"));

        let err = generate_layout(
            LayoutKind::VStack,
            &views(&["stackLayout"]),
            &LayoutConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateView(_)));
    }
}
