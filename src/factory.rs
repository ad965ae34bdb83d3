//! View construction snippets
//!
//! Maps a [`ViewSpec`] to the Swift expression that constructs it. Views with
//! content (text, title, placeholder, image) or extra properties get a scoped
//! construction block rendered from `views/block.jinja`:
//!
//! ```text
//! {
//!     let label = UILabel()
//!     label.text = "Hi"
//!     return label
//! }()
//! ```
//!
//! Everything else is a bare constructor call. Text is substituted literally;
//! callers must supply content that is already a valid Swift string literal body.

use crate::model::{ViewKind, ViewSpec};
use crate::templates;
use crate::util::binding_name;
use serde::Serialize;

/// Prefixes that route an image reference to `UIImage(systemName:)`
pub const SYSTEM_IMAGE_MARKERS: [&str; 2] = ["systemName:", "system:"];

/// Build the construction expression for one view. Never fails.
pub fn create_view(spec: &ViewSpec) -> String {
    let construction = Construction::plan(spec);
    if !construction.needs_block() {
        return construction.constructor;
    }

    match templates::render(templates::VIEW_BLOCK, &construction) {
        Ok(code) => code.trim_end().to_string(),
        Err(e) => {
            tracing::warn!(view = %spec.name, error = %e, "view block template failed, using bare constructor");
            construction.constructor
        }
    }
}

/// `UIImage(...)` lookup expression for an image reference
pub fn image_expression(reference: &str) -> String {
    for marker in SYSTEM_IMAGE_MARKERS {
        if let Some(symbol) = reference.strip_prefix(marker) {
            return format!("UIImage(systemName: \"{}\")", symbol.trim());
        }
    }
    format!("UIImage(named: \"{}\")", reference)
}

#[derive(Debug, Serialize)]
struct Construction<'a> {
    binding: String,
    constructor: String,
    setup: Vec<String>,
    properties: Vec<PropertyLine<'a>>,
    #[serde(skip)]
    generic: bool,
}

#[derive(Debug, Serialize)]
struct PropertyLine<'a> {
    name: &'a str,
    value: &'a serde_json::Value,
}

impl<'a> Construction<'a> {
    fn plan(spec: &'a ViewSpec) -> Self {
        let type_name = spec.kind.type_name();
        let binding = if spec.kind.is_known() {
            binding_name(type_name)
        } else {
            "view".to_string()
        };

        let constructor = match spec.kind {
            ViewKind::Button => "UIButton(type: .system)".to_string(),
            _ => format!("{}()", type_name),
        };

        let text = spec.text.as_deref();
        let setup: Vec<String> = match (&spec.kind, text, spec.image.as_deref()) {
            (ViewKind::Label, Some(t), _) => vec![format!("{}.text = \"{}\"", binding, t)],
            (ViewKind::Button, Some(t), _) => {
                vec![format!("{}.setTitle(\"{}\", for: .normal)", binding, t)]
            }
            (ViewKind::TextField, Some(t), _) => {
                vec![format!("{}.placeholder = \"{}\"", binding, t)]
            }
            (ViewKind::TextView, Some(t), _) => vec![format!("{}.text = \"{}\"", binding, t)],
            (ViewKind::ImageView, _, Some(image)) => {
                vec![format!("{}.image = {}", binding, image_expression(image))]
            }
            _ => Vec::new(),
        };

        let properties = spec
            .properties
            .iter()
            .map(|(name, value)| PropertyLine { name, value })
            .collect();

        Self {
            binding,
            constructor,
            setup,
            properties,
            generic: !spec.kind.is_known(),
        }
    }

    fn needs_block(&self) -> bool {
        self.generic || !self.setup.is_empty() || !self.properties.is_empty()
    }
}
