// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # flkit: FrameLayoutKit migration assistant
//!
//! Helps move iOS layout code from Auto Layout (`NSLayoutConstraint`,
//! anchors, `UIStackView`) to FrameLayoutKit's operator DSL.
//!
//! - **Generate** DSL source from a layout description
//! - **Convert** constraint-based source with pattern rules
//! - **Validate** DSL source and render a categorized report
//! - **Migrate**: estimate migration scope for a set of Swift files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flkit::{generate_layout, validate_source, CheckLevel, LayoutConfig, LayoutKind, ViewSpec};
//!
//! let views = vec![
//!     ViewSpec::new("titleLabel", "UILabel").with_text("Welcome"),
//!     ViewSpec::new("subtitleLabel", "UILabel"),
//! ];
//! let config = LayoutConfig { spacing: Some(12.0), ..Default::default() };
//!
//! let code = generate_layout(LayoutKind::VStack, &views, &config)?;
//! assert!(validate_source(&code, CheckLevel::Full).is_valid);
//! ```
//!
//! ## Conversion
//!
//! Conversion is textual, not a Swift parse. Passes run in a fixed order
//! (constraint activation blocks, then `UIStackView` containers, then
//! anchors). Under the conservative strategy every activation block is kept
//! behind a `// TODO: Convert to FrameLayoutKit` marker; under the
//! aggressive strategy it is replaced. Either way each block that was not
//! confidently rewritten produces a warning with its line number.
//!
//! ## Limitations
//!
//! - Text content is inserted into generated Swift string literals as is.
//!   Callers supply already-escaped content.
//! - `FrameLayout` uses only the first view; extra views are ignored.
//! - Converter hints and semantic validation rules are best-effort
//!   heuristics.

pub mod config;
pub mod convert;
pub mod error;
pub mod factory;
pub mod generate;
pub mod migrate;
pub mod model;
pub mod templates;
pub mod util;
pub mod validate;

// Re-exports
pub use config::{ToolConfig, CONFIG_FILE};
pub use convert::{
    convert_legacy_source, ConversionOptions, ConversionResult, ConversionStats, LegacyConverter,
    MigrationStrategy, Pass, Suggestion, PASS_ORDER,
};
pub use error::{Error, Result};
pub use factory::create_view;
pub use generate::{generate_layout, ConfigStyle, GenerateConfig, LayoutGenerator};
pub use migrate::{
    analyze_migration_scope, Complexity, FileScope, MigrationAnalysis, MigrationGuide,
    MigrationInput, OutputFormat,
};
pub use model::{
    Alignment, Arity, Axis, Distribution, EdgeInsets, GenerateRequest, HorizontalAlignment,
    LayoutConfig, LayoutKind, Padding, VerticalAlignment, ViewKind, ViewSpec,
};
pub use validate::{validate_source, CheckLevel, Diagnostic, Severity, ValidationResult};

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
