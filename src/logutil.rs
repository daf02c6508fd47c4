//! Logging utilities for sanitizing user-supplied strings (variable names and
//! values) so log lines stay single-line and readable.

/// Escape a string for single-line logging: control characters become
/// backslash escapes, and long strings are cut with an ellipsis to cap noise.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 120;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("a\nb\tc"), "a\\nb\\tc");
        assert_eq!(escape_log("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn truncates_long_values() {
        let long = "x".repeat(500);
        let escaped = escape_log(&long);
        assert!(escaped.ends_with('…'));
        assert!(escaped.chars().count() <= 121);
    }
}
