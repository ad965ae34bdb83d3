//! Shared utility functions
//!
//! Small text helpers used by the generator, converter and validator.

/// Check whether `s` is a plain Swift identifier
///
/// # Examples
/// ```
/// use flkit::util::is_swift_identifier;
/// assert!(is_swift_identifier("titleLabel"));
/// assert!(is_swift_identifier("_cell2"));
/// assert!(!is_swift_identifier("2cells"));
/// assert!(!is_swift_identifier("title label"));
/// ```
pub fn is_swift_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Render a number the way Swift source expects it (`8`, not `8.0`)
///
/// # Examples
/// ```
/// use flkit::util::format_number;
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-16.0), "-16");
/// ```
pub fn format_number(n: f64) -> String {
    format!("{}", n)
}

/// 1-based line number of a byte offset
pub fn line_of(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// First `max_chars` characters of `text`
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Leading whitespace of the line containing `offset`, if only whitespace
/// precedes `offset` on that line
pub fn line_indent(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &text[line_start..offset];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}

/// Lower-camel binding name for a UIKit class (`UIImageView` -> `imageView`)
///
/// # Examples
/// ```
/// use flkit::util::binding_name;
/// assert_eq!(binding_name("UIImageView"), "imageView");
/// assert_eq!(binding_name("UILabel"), "label");
/// ```
pub fn binding_name(type_name: &str) -> String {
    let base = type_name.strip_prefix("UI").unwrap_or(type_name);
    let mut chars = base.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => "view".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_swift_identifier() {
        assert!(is_swift_identifier("a"));
        assert!(is_swift_identifier("itemLabel10"));
        assert!(!is_swift_identifier(""));
        assert!(!is_swift_identifier("item-label"));
        assert!(!is_swift_identifier("\"quoted\""));
    }

    #[test]
    fn test_line_of() {
        let text = "a\nb\nc";
        assert_eq!(line_of(text, 0), 1);
        assert_eq!(line_of(text, 2), 2);
        assert_eq!(line_of(text, 4), 3);
        assert_eq!(line_of(text, 100), 3);
    }

    #[test]
    fn test_preview_is_char_safe() {
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(preview("hi", 50), "hi");
    }

    #[test]
    fn test_line_indent() {
        let text = "func f() {\n    NSLayoutConstraint.activate([])\n}";
        let offset = text.find("NSLayout").unwrap();
        assert_eq!(line_indent(text, offset), "    ");

        let inline = "let x = 1; NSLayoutConstraint.activate([])";
        let offset = inline.find("NSLayout").unwrap();
        assert_eq!(line_indent(inline, offset), "");
    }

    #[test]
    fn test_binding_name() {
        assert_eq!(binding_name("UITextField"), "textField");
        assert_eq!(binding_name("UIButton"), "button");
        assert_eq!(binding_name("BadgeView"), "badgeView");
    }
}
