//! Template-based code generation
//!
//! Uses MiniJinja templates for the parts of the output whose shape is fixed:
//! view construction blocks and the migration guide. Templates are embedded
//! in the binary.

pub mod filters;

use minijinja::Environment;
use serde::Serialize;
use std::sync::OnceLock;

// Embedded templates (compiled into binary)
mod embedded {
    pub const VIEW_BLOCK: &str = include_str!("../../templates/views/block.jinja");
    pub const GUIDE_MARKDOWN: &str = include_str!("../../templates/guide/guide.md");
    // `.html` suffix turns on HTML auto-escaping
    pub const GUIDE_HTML: &str = include_str!("../../templates/guide/guide.html");
}

pub const VIEW_BLOCK: &str = "views/block.jinja";
pub const GUIDE_MARKDOWN: &str = "guide/guide.md";
pub const GUIDE_HTML: &str = "guide/guide.html";

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

/// Initialize the template engine with embedded templates
fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();

    filters::register_filters(&mut env);

    env.add_template(VIEW_BLOCK, embedded::VIEW_BLOCK)
        .expect("Failed to load view block template");
    env.add_template(GUIDE_MARKDOWN, embedded::GUIDE_MARKDOWN)
        .expect("Failed to load markdown guide template");
    env.add_template(GUIDE_HTML, embedded::GUIDE_HTML)
        .expect("Failed to load html guide template");

    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Render one embedded template with a serializable context
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, TemplateError> {
    let template = engine()
        .get_template(name)
        .map_err(|e| TemplateError::TemplateNotFound(e.to_string()))?;
    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Template errors
#[derive(Debug, Clone)]
pub enum TemplateError {
    /// Template not found
    TemplateNotFound(String),
    /// Template render error
    RenderError(String),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::TemplateNotFound(msg) => write!(f, "Template not found: {}", msg),
            TemplateError::RenderError(msg) => write!(f, "Template render error: {}", msg),
        }
    }
}

impl std::error::Error for TemplateError {}
