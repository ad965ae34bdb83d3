//! Layout configuration facets
//!
//! A [`Facet`] is one present `LayoutConfig` field translated for a specific
//! layout kind. [`facets_for`] yields them in the fixed emission order:
//! axis, spacing/interItemSpacing, lineSpacing, distribution, padding,
//! alignment, rows/columns, overlap flag.

use crate::model::{Alignment, Axis, Distribution, LayoutConfig, LayoutKind, Padding};
use crate::util::format_number;

pub const DEFAULT_GRID_ROWS: u32 = 2;
pub const DEFAULT_GRID_COLUMNS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum Facet {
    Axis(Axis),
    Spacing(f64),
    /// Grid spacing, applied to both directions
    GridSpacing(f64),
    InterItemSpacing(f64),
    LineSpacing(f64),
    Distribution(Distribution),
    Padding(Padding),
    /// DoubleFrame padding, applied to the left and right panes
    PaneInsets(Padding),
    Alignment(Alignment),
    Rows(u32),
    Columns(u32),
    Overlap,
}

impl Facet {
    /// Property statements applying this facet to `target`
    pub fn statements(&self, target: &str) -> Vec<String> {
        match self {
            Facet::Axis(axis) => vec![format!("{}.axis = .{}", target, axis.as_str())],
            Facet::Spacing(v) => vec![format!("{}.spacing = {}", target, format_number(*v))],
            Facet::GridSpacing(v) => vec![
                format!("{}.verticalSpacing = {}", target, format_number(*v)),
                format!("{}.horizontalSpacing = {}", target, format_number(*v)),
            ],
            Facet::InterItemSpacing(v) => {
                vec![format!("{}.interItemSpacing = {}", target, format_number(*v))]
            }
            Facet::LineSpacing(v) => {
                vec![format!("{}.lineSpacing = {}", target, format_number(*v))]
            }
            Facet::Distribution(d) => {
                vec![format!("{}.distribution = .{}", target, d.as_str())]
            }
            Facet::Padding(p) => vec![format!("{}.padding({})", target, padding_args(p))],
            Facet::PaneInsets(p) => vec![
                format!("{}.leftFrameLayout.padding({})", target, padding_args(p)),
                format!("{}.rightFrameLayout.padding({})", target, padding_args(p)),
            ],
            Facet::Alignment(a) => vec![format!(
                "{}.align(.{}, .{})",
                target,
                a.vertical_str(),
                a.horizontal_str()
            )],
            Facet::Rows(n) => vec![format!("{}.rows = {}", target, n)],
            Facet::Columns(n) => vec![format!("{}.columns = {}", target, n)],
            Facet::Overlap => vec![format!("{}.isOverlapped = true", target)],
        }
    }

    /// Builder call for the chained form, `None` when the layout has no
    /// chainable method for this facet
    pub fn chain_call(&self) -> Option<String> {
        match self {
            Facet::Axis(axis) => Some(format!(".axis(.{})", axis.as_str())),
            Facet::Spacing(v) => Some(format!(".spacing({})", format_number(*v))),
            Facet::InterItemSpacing(v) => {
                Some(format!(".interItemSpacing({})", format_number(*v)))
            }
            Facet::LineSpacing(v) => Some(format!(".lineSpacing({})", format_number(*v))),
            Facet::Distribution(d) => Some(format!(".distribution(.{})", d.as_str())),
            Facet::Padding(p) => Some(format!(".padding({})", padding_args(p))),
            Facet::Alignment(a) => Some(format!(
                ".align(.{}, .{})",
                a.vertical_str(),
                a.horizontal_str()
            )),
            Facet::Rows(n) => Some(format!(".rows({})", n)),
            Facet::Columns(n) => Some(format!(".columns({})", n)),
            Facet::GridSpacing(_) | Facet::PaneInsets(_) | Facet::Overlap => None,
        }
    }
}

/// Argument list of a `padding(...)` call
pub fn padding_args(padding: &Padding) -> String {
    match padding {
        Padding::Uniform(v) => format_number(*v),
        Padding::Insets(e) => format!(
            "top: {}, left: {}, bottom: {}, right: {}",
            format_number(e.top),
            format_number(e.left),
            format_number(e.bottom),
            format_number(e.right)
        ),
    }
}

/// Facets of `config` that apply to `kind`, in emission order
pub fn facets_for(kind: LayoutKind, config: &LayoutConfig) -> Vec<Facet> {
    use LayoutKind::*;

    let mut facets = Vec::new();

    if matches!(kind, DoubleFrame | Grid | ScrollStack | Flow) {
        facets.extend(config.axis.map(Facet::Axis));
    }

    match kind {
        VStack | HStack | ZStack | DoubleFrame | ScrollStack => {
            facets.extend(config.spacing.map(Facet::Spacing));
        }
        Grid => facets.extend(config.spacing.map(Facet::GridSpacing)),
        Flow => {
            facets.extend(config.inter_item_spacing.map(Facet::InterItemSpacing));
            facets.extend(config.line_spacing.map(Facet::LineSpacing));
        }
        SingleFrame => {}
    }

    if matches!(kind, VStack | HStack | DoubleFrame | ScrollStack | Flow) {
        facets.extend(config.distribution.map(Facet::Distribution));
    }

    match kind {
        SingleFrame | VStack | HStack | ZStack | ScrollStack | Flow => {
            facets.extend(config.padding.map(Facet::Padding));
        }
        DoubleFrame => facets.extend(config.padding.map(Facet::PaneInsets)),
        Grid => {}
    }

    if kind == SingleFrame {
        facets.extend(config.alignment.map(Facet::Alignment));
    }

    if kind == Grid {
        facets.push(Facet::Rows(config.rows.unwrap_or(DEFAULT_GRID_ROWS)));
        facets.push(Facet::Columns(config.columns.unwrap_or(DEFAULT_GRID_COLUMNS)));
    }

    if kind == DoubleFrame && config.is_overlapped == Some(true) {
        facets.push(Facet::Overlap);
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdgeInsets, HorizontalAlignment};

    #[test]
    fn test_padding_args() {
        assert_eq!(padding_args(&Padding::Uniform(20.0)), "20");
        let insets = Padding::Insets(EdgeInsets {
            top: 10.0,
            left: 15.0,
            bottom: 10.0,
            right: 15.0,
        });
        assert_eq!(
            padding_args(&insets),
            "top: 10, left: 15, bottom: 10, right: 15"
        );
    }

    #[test]
    fn test_fixed_order() {
        let config = LayoutConfig {
            padding: Some(Padding::Uniform(4.0)),
            distribution: Some(Distribution::Equal),
            spacing: Some(8.0),
            axis: Some(Axis::Horizontal),
            is_overlapped: Some(true),
            ..Default::default()
        };
        let facets = facets_for(LayoutKind::DoubleFrame, &config);
        assert_eq!(
            facets,
            vec![
                Facet::Axis(Axis::Horizontal),
                Facet::Spacing(8.0),
                Facet::Distribution(Distribution::Equal),
                Facet::PaneInsets(Padding::Uniform(4.0)),
                Facet::Overlap,
            ]
        );
    }

    #[test]
    fn test_grid_defaults_rows_and_columns() {
        let facets = facets_for(LayoutKind::Grid, &LayoutConfig::default());
        assert_eq!(facets, vec![Facet::Rows(2), Facet::Columns(3)]);
    }

    #[test]
    fn test_inapplicable_facets_are_dropped() {
        let config = LayoutConfig {
            axis: Some(Axis::Vertical),
            alignment: Some(Alignment::default()),
            rows: Some(4),
            ..Default::default()
        };
        assert!(facets_for(LayoutKind::VStack, &config).is_empty());
        assert_eq!(
            facets_for(LayoutKind::SingleFrame, &config),
            vec![Facet::Alignment(Alignment::default())]
        );
    }

    #[test]
    fn test_statement_and_chain_forms() {
        let align = Facet::Alignment(Alignment {
            vertical: None,
            horizontal: Some(HorizontalAlignment::Left),
        });
        assert_eq!(align.statements("row"), vec!["row.align(.center, .left)"]);
        assert_eq!(align.chain_call().as_deref(), Some(".align(.center, .left)"));

        let spacing = Facet::GridSpacing(6.0);
        assert_eq!(
            spacing.statements("gridLayout"),
            vec![
                "gridLayout.verticalSpacing = 6",
                "gridLayout.horizontalSpacing = 6"
            ]
        );
        assert_eq!(spacing.chain_call(), None);
    }
}
