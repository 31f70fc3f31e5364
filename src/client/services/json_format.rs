//! Rendering helpers for the generic JSON viewer.
//!
//! A [`JsonDocument`] fixes the exact text shown (and copied) once, when a
//! response arrives. Highlighting works on that text line by line and only
//! partitions it, so joining the spans of a line gives the line back.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    value: Value,
    text: String,
}

impl JsonDocument {
    /// Strings are shown verbatim, everything else pretty printed with
    /// two-space indentation.
    pub fn from_value(value: Value) -> Self {
        let text = match &value {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        };
        Self { value, text }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Null and empty strings render the empty-state notice.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Lines with their 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.split('\n').enumerate().map(|(i, line)| (i + 1, line))
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    String,
    Boolean,
    Null,
    Number,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

fn push<'a>(spans: &mut Vec<Span<'a>>, kind: TokenKind, text: &'a str) {
    if !text.is_empty() {
        spans.push(Span { kind, text });
    }
}

/// Byte offset just past the closing quote of a JSON string starting at 0.
fn string_end(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in s.char_indices().skip(1) {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(idx + 1),
            _ => {}
        }
    }
    None
}

fn looks_numeric(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '-' || c.is_ascii_digit() => {}
        _ => return false,
    }
    s.chars().all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
}

fn value_spans<'a>(spans: &mut Vec<Span<'a>>, value: &'a str) {
    if value.starts_with('"') {
        if let Some(end) = string_end(value) {
            push(spans, TokenKind::String, &value[..end]);
            push(spans, TokenKind::Plain, &value[end..]);
            return;
        }
        push(spans, TokenKind::Plain, value);
        return;
    }

    let core = value.trim_end_matches(',');
    let tail = &value[core.len()..];
    let kind = match core {
        "true" | "false" => TokenKind::Boolean,
        "null" => TokenKind::Null,
        _ if looks_numeric(core) => TokenKind::Number,
        _ => TokenKind::Plain,
    };
    push(spans, kind, core);
    push(spans, TokenKind::Plain, tail);
}

pub fn highlight_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let body = line.trim_start();
    push(&mut spans, TokenKind::Plain, &line[..line.len() - body.len()]);

    if body.starts_with('"') {
        if let Some(end) = string_end(body) {
            let after = &body[end..];
            if let Some(rest) = after.strip_prefix(':') {
                push(&mut spans, TokenKind::Key, &body[..end]);
                let value = rest.trim_start();
                let sep_len = 1 + rest.len() - value.len();
                push(&mut spans, TokenKind::Plain, &after[..sep_len]);
                value_spans(&mut spans, value);
                return spans;
            }
        }
    }

    value_spans(&mut spans, body);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn joined(line: &str) -> String {
        highlight_line(line).iter().map(|s| s.text).collect()
    }

    fn kinds(line: &str) -> Vec<TokenKind> {
        highlight_line(line).iter().map(|s| s.kind).collect()
    }

    #[test]
    fn pretty_prints_with_two_spaces() {
        let doc = JsonDocument::from_value(json!({"status": "UP"}));
        assert_eq!(doc.text(), "{\n  \"status\": \"UP\"\n}");
        let lines: Vec<_> = doc.numbered_lines().collect();
        assert_eq!(lines[0], (1, "{"));
        assert_eq!(lines[2], (3, "}"));
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn strings_are_shown_verbatim() {
        let exposition = "# HELP up Whether the target is up\nup 1\n";
        let doc = JsonDocument::from_value(Value::String(exposition.into()));
        assert_eq!(doc.text(), exposition);
    }

    #[test]
    fn empty_values() {
        assert!(JsonDocument::from_value(Value::Null).is_empty());
        assert!(JsonDocument::from_value(json!("")).is_empty());
        assert!(!JsonDocument::from_value(json!({})).is_empty());
        assert!(!JsonDocument::from_value(json!(0)).is_empty());
    }

    #[test]
    fn classifies_key_value_lines() {
        assert_eq!(
            kinds("  \"name\": \"Nodeboot\","),
            vec![TokenKind::Plain, TokenKind::Key, TokenKind::Plain, TokenKind::String, TokenKind::Plain]
        );
        assert_eq!(
            kinds("  \"dirty\": false"),
            vec![TokenKind::Plain, TokenKind::Key, TokenKind::Plain, TokenKind::Boolean]
        );
        assert_eq!(
            kinds("  \"percent\": 50.0,"),
            vec![TokenKind::Plain, TokenKind::Key, TokenKind::Plain, TokenKind::Number, TokenKind::Plain]
        );
        assert_eq!(
            kinds("    \"parent\": null"),
            vec![TokenKind::Plain, TokenKind::Key, TokenKind::Plain, TokenKind::Null]
        );
        assert_eq!(
            kinds("  \"components\": {"),
            vec![TokenKind::Plain, TokenKind::Key, TokenKind::Plain, TokenKind::Plain]
        );
    }

    #[test]
    fn spans_reassemble_every_line() {
        let doc = JsonDocument::from_value(json!({
            "a\"b": "x: \"y\"",
            "list": [1, -2.5e3, true, null, "s"],
            "nested": {"k": "v", "ünï": "çødé"},
        }));
        for (_, line) in doc.numbered_lines() {
            assert_eq!(joined(line), line);
        }
        for odd in ["", "   ", "\"unterminated", "system_cpu_usage 23.5", "},"] {
            assert_eq!(joined(odd), odd);
        }
    }

    #[test]
    fn escaped_quotes_stay_inside_key() {
        let spans = highlight_line("  \"a\\\"b\": 1");
        assert_eq!(spans[1], Span { kind: TokenKind::Key, text: "\"a\\\"b\"" });
    }
}
