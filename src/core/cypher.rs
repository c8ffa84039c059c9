// src/core/cypher.rs
//
// Escaping for text that ends up inside a query. Names come from a scraped
// page, so nothing is interpolated without going through one of these.

/// Quote `s` as a double-quoted string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Plain identifiers are emitted as-is: ASCII letter or `_`, then ASCII
/// alphanumerics or `_`.
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render a label or relationship type. Anything that is not a plain
/// identifier is backtick-quoted with inner backticks doubled.
pub fn identifier(s: &str) -> String {
    if is_plain_identifier(s) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('`');
    for ch in s.chars() {
        if ch == '`' {
            out.push_str("``");
        } else {
            out.push(ch);
        }
    }
    out.push('`');
    out
}

/// `-` is not valid in a bare label; the store side uses `_` instead.
pub fn label_from_name(name: &str) -> String {
    name.replace('-', "_")
}
