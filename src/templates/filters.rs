//! Custom MiniJinja filters for code generation

use minijinja::value::{Value, ValueKind};
use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("swift_value", swift_value);
}

/// Render a property value as a Swift expression
///
/// Strings are inserted verbatim so callers can pass expressions such as
/// `.systemBlue` or `UIFont.boldSystemFont(ofSize: 17)`.
fn swift_value(value: Value) -> String {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => "nil".to_string(),
        ValueKind::String => value.as_str().unwrap_or_default().to_string(),
        _ => value.to_string(),
    }
}
