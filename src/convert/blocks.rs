//! Balanced `NSLayoutConstraint.activate( ... )` scanning
//!
//! Regexes cannot match nested parentheses, so activation blocks are found
//! with a small byte scanner. String literals and comments are skipped both
//! when looking for the call and when matching its parentheses.

/// Call prefix that opens an activation block
pub const ACTIVATE_CALL: &str = "NSLayoutConstraint.activate(";

/// Outcome of scanning one activation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Complete block; `start..end` covers the call including its closing `)`
    Block { start: usize, end: usize },
    /// Call whose parentheses never close
    Unbalanced { start: usize },
}

/// All activation blocks in `source`, in order
///
/// Calls inside comments or string literals are not blocks. Scanning stops at
/// the first unbalanced call since the rest of the text is inside it.
pub fn scan_activation_blocks(source: &str) -> Vec<Scan> {
    let bytes = source.as_bytes();
    let call = ACTIVATE_CALL.as_bytes();
    let mut scans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if let Some(next) = skip_literal(bytes, i) {
            i = next;
            continue;
        }
        if !bytes[i..].starts_with(call) {
            i += 1;
            continue;
        }
        let start = i;
        match closing_paren(bytes, start + call.len() - 1) {
            Some(close) => {
                scans.push(Scan::Block {
                    start,
                    end: close + 1,
                });
                i = close + 1;
            }
            None => {
                scans.push(Scan::Unbalanced { start });
                break;
            }
        }
    }

    scans
}

/// Byte offset of the `)` matching the `(` at `open`
fn closing_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        if let Some(next) = skip_literal(bytes, i) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Offset just past the comment or string literal starting at `i`, if any
fn skip_literal(bytes: &[u8], i: usize) -> Option<usize> {
    let rest = &bytes[i..];
    if rest.starts_with(b"//") {
        return Some(find(bytes, i + 2, b"\n").map_or(bytes.len(), |at| at + 1));
    }
    if rest.starts_with(b"/*") {
        return Some(find(bytes, i + 2, b"*/").map_or(bytes.len(), |at| at + 2));
    }
    if rest.starts_with(b"\"\"\"") {
        return Some(find(bytes, i + 3, b"\"\"\"").map_or(bytes.len(), |at| at + 3));
    }
    if rest.first() != Some(&b'"') {
        return None;
    }

    // single-line string; an unterminated one ends at the newline
    let mut j = i + 1;
    while j < bytes.len() && bytes[j] != b'"' && bytes[j] != b'\n' {
        if bytes[j] == b'\\' {
            j += 1;
        }
        j += 1;
    }
    Some((j + 1).min(bytes.len()))
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|at| from + at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(source: &str) -> Vec<&str> {
        scan_activation_blocks(source)
            .into_iter()
            .filter_map(|scan| match scan {
                Scan::Block { start, end } => Some(&source[start..end]),
                Scan::Unbalanced { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_nested_parens() {
        let source = "NSLayoutConstraint.activate([\n    a.topAnchor.constraint(equalTo: b.topAnchor, constant: 20)\n])\nfoo()";
        assert_eq!(
            blocks(source),
            vec!["NSLayoutConstraint.activate([\n    a.topAnchor.constraint(equalTo: b.topAnchor, constant: 20)\n])"]
        );
    }

    #[test]
    fn test_multiple_blocks() {
        let source = "NSLayoutConstraint.activate([x])\nbar()\nNSLayoutConstraint.activate([y])";
        assert_eq!(
            blocks(source),
            vec![
                "NSLayoutConstraint.activate([x])",
                "NSLayoutConstraint.activate([y])"
            ]
        );
    }

    #[test]
    fn test_strings_and_comments_are_skipped() {
        let source = "NSLayoutConstraint.activate([\n    c(\")\") // )\n    /* ) */\n])";
        assert_eq!(blocks(source), vec![source]);
    }

    #[test]
    fn test_calls_in_comments_and_strings_are_not_blocks() {
        let source = "// NSLayoutConstraint.activate([old])\n\
                      /* NSLayoutConstraint.activate([older]) */\n\
                      let s = \"NSLayoutConstraint.activate([x])\"\n\
                      NSLayoutConstraint.activate([live])";
        assert_eq!(blocks(source), vec!["NSLayoutConstraint.activate([live])"]);
    }

    #[test]
    fn test_commented_unbalanced_call_is_ignored() {
        let source = "// NSLayoutConstraint.activate([\nfoo()\n";
        assert!(scan_activation_blocks(source).is_empty());
    }

    #[test]
    fn test_multiline_string_is_skipped() {
        let source = "let doc = \"\"\"\n)\n\"\"\"\nNSLayoutConstraint.activate([\"\"\"\n)\"\"\"])";
        assert_eq!(blocks(source), vec!["NSLayoutConstraint.activate([\"\"\"\n)\"\"\"])"]);
    }

    #[test]
    fn test_unbalanced_block() {
        let source = "ok()\nNSLayoutConstraint.activate([\n    a.constraint(\n";
        assert_eq!(
            scan_activation_blocks(source),
            vec![Scan::Unbalanced { start: 5 }]
        );
    }

    #[test]
    fn test_no_blocks() {
        assert!(scan_activation_blocks("let x = NSLayoutConstraint()").is_empty());
    }
}
