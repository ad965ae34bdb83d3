//! Layout description model
//!
//! Plain data describing one view ([`ViewSpec`]) and one layout
//! ([`LayoutKind`] + [`LayoutConfig`]). Field names follow the JSON shape
//! accepted at the request boundary (`layoutType`, `views`, `configuration`).

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// UIKit view classes the factory knows how to construct
///
/// Unknown class names are preserved in [`ViewKind::Other`] and emitted with
/// a generic constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewKind {
    Label,
    Button,
    ImageView,
    TextField,
    TextView,
    View,
    StackView,
    ScrollView,
    TableView,
    CollectionView,
    Other(String),
}

impl ViewKind {
    /// Swift type name
    pub fn type_name(&self) -> &str {
        match self {
            ViewKind::Label => "UILabel",
            ViewKind::Button => "UIButton",
            ViewKind::ImageView => "UIImageView",
            ViewKind::TextField => "UITextField",
            ViewKind::TextView => "UITextView",
            ViewKind::View => "UIView",
            ViewKind::StackView => "UIStackView",
            ViewKind::ScrollView => "UIScrollView",
            ViewKind::TableView => "UITableView",
            ViewKind::CollectionView => "UICollectionView",
            ViewKind::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ViewKind::Other(_))
    }
}

impl From<String> for ViewKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "UILabel" => ViewKind::Label,
            "UIButton" => ViewKind::Button,
            "UIImageView" => ViewKind::ImageView,
            "UITextField" => ViewKind::TextField,
            "UITextView" => ViewKind::TextView,
            "UIView" => ViewKind::View,
            "UIStackView" => ViewKind::StackView,
            "UIScrollView" => ViewKind::ScrollView,
            "UITableView" => ViewKind::TableView,
            "UICollectionView" => ViewKind::CollectionView,
            _ => ViewKind::Other(s),
        }
    }
}

impl From<&str> for ViewKind {
    fn from(s: &str) -> Self {
        ViewKind::from(s.to_string())
    }
}

impl From<ViewKind> for String {
    fn from(kind: ViewKind) -> Self {
        kind.type_name().to_string()
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One view to construct and attach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewSpec {
    /// Swift identifier, unique within the layout
    pub name: String,

    /// UIKit class name (`UILabel`, `UIButton`, ...)
    #[serde(rename = "type", alias = "kind")]
    #[schemars(with = "String")]
    pub kind: ViewKind,

    /// Label text, button title or text field placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Image asset name; prefix with `systemName:` for SF Symbols
    #[serde(default, alias = "imageRef", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Extra property assignments, values inserted as Swift expressions.
    /// Emitted in the order given.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(with = "std::collections::BTreeMap<String, serde_json::Value>")]
    pub properties: IndexMap<String, serde_json::Value>,
}

impl ViewSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<ViewKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            text: None,
            image: None,
            properties: IndexMap::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

/// FrameLayoutKit layout containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LayoutKind {
    #[serde(rename = "FrameLayout")]
    SingleFrame,
    #[serde(rename = "VStackLayout")]
    VStack,
    #[serde(rename = "HStackLayout")]
    HStack,
    #[serde(rename = "ZStackLayout")]
    ZStack,
    #[serde(rename = "DoubleFrameLayout")]
    DoubleFrame,
    #[serde(rename = "GridFrameLayout")]
    Grid,
    #[serde(rename = "ScrollStackView")]
    ScrollStack,
    #[serde(rename = "FlowFrameLayout")]
    Flow,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 8] = [
        LayoutKind::SingleFrame,
        LayoutKind::VStack,
        LayoutKind::HStack,
        LayoutKind::ZStack,
        LayoutKind::DoubleFrame,
        LayoutKind::Grid,
        LayoutKind::ScrollStack,
        LayoutKind::Flow,
    ];

    /// Swift type name
    pub fn type_name(self) -> &'static str {
        match self {
            LayoutKind::SingleFrame => "FrameLayout",
            LayoutKind::VStack => "VStackLayout",
            LayoutKind::HStack => "HStackLayout",
            LayoutKind::ZStack => "ZStackLayout",
            LayoutKind::DoubleFrame => "DoubleFrameLayout",
            LayoutKind::Grid => "GridFrameLayout",
            LayoutKind::ScrollStack => "ScrollStackView",
            LayoutKind::Flow => "FlowFrameLayout",
        }
    }

    /// How many views a layout of this kind accepts
    pub fn arity(self) -> Arity {
        match self {
            LayoutKind::DoubleFrame => Arity::Exactly(2),
            LayoutKind::SingleFrame => Arity::AtLeast(1),
            _ => Arity::AtLeast(0),
        }
    }

    pub fn is_stack(self) -> bool {
        matches!(self, LayoutKind::VStack | LayoutKind::HStack)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Accepted view count for a layout kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    Left,
    Center,
    Right,
    Top,
    Bottom,
    Equal,
    Fill,
    Justified,
}

impl Distribution {
    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::Left => "left",
            Distribution::Center => "center",
            Distribution::Right => "right",
            Distribution::Top => "top",
            Distribution::Bottom => "bottom",
            Distribution::Equal => "equal",
            Distribution::Fill => "fill",
            Distribution::Justified => "justified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    Fill,
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    Fill,
    Fit,
}

/// Content alignment; a missing component means `center`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Alignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlignment>,
}

impl Alignment {
    pub fn vertical_str(&self) -> &'static str {
        match self.vertical.unwrap_or(VerticalAlignment::Center) {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Fill => "fill",
            VerticalAlignment::Fit => "fit",
        }
    }

    pub fn horizontal_str(&self) -> &'static str {
        match self.horizontal.unwrap_or(HorizontalAlignment::Center) {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Fill => "fill",
            HorizontalAlignment::Fit => "fit",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EdgeInsets {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub right: f64,
}

/// Padding given either as one value for all edges or per edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Insets(EdgeInsets),
}

/// Layout configuration; every facet is optional and absent facets emit nothing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inter_item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_overlapped: Option<bool>,
}

/// A generation request as read at the boundary (CLI, JSON or YAML files)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub layout_type: LayoutKind,
    pub views: Vec<ViewSpec>,
    #[serde(default)]
    pub configuration: LayoutConfig,
}

impl GenerateRequest {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::Request(e.to_string()))
    }

    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| crate::Error::Request(e.to_string()))
    }
}
