//! Section value encodings
//!
//! A raw section value is classified into exactly one of four encodings and
//! converted between them: empty, scalar, bracketed single-line array, and
//! indented multi-line array. Multi-line raw values carry their leading
//! newline and list markers, matching what the section operations read and
//! write verbatim.

use crate::error::{Error, Result};

/// Indentation and marker for one multi-line array item.
const LIST_ITEM_PREFIX: &str = "  - ";

/// The four supported raw value encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Empty,
    Scalar,
    SingleLineArray,
    MultiLineArray,
}

/// Classify a raw section value into its encoding.
///
/// The line-break check runs on the untrimmed raw text: a multi-line value
/// carries its leading newline, and trimming a single-item array would strip
/// the only line break it has.
pub fn classify_value(raw: &str) -> ValueKind {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ValueKind::Empty
    } else if raw.contains('\n') {
        ValueKind::MultiLineArray
    } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
        ValueKind::SingleLineArray
    } else {
        ValueKind::Scalar
    }
}

/// A decoded section value: one logical string or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    Scalar(String),
    List(Vec<String>),
}

/// Target encodings for [`format_value`].
///
/// The two `SingleString*` styles force a lone string into a one-element
/// array; they exist so callers can express "this key is always an array"
/// independently of how many entries it currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Scalar,
    SingleLineArray,
    MultiLineArray,
    SingleStringToSingleLineArray,
    SingleStringToMultiLineArray,
}

fn unescape(item: &str) -> String {
    let trimmed = item.trim();
    if is_escaped(trimmed) {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_escaped(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
}

fn split_inline_items(inner: &str) -> Result<Vec<String>> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in inner.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    current.push(c);
                }
                '[' | ']' => {
                    return Err(Error::malformed("nested arrays are not supported"));
                }
                ',' => {
                    items.push(unescape(&current));
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }
    if quote.is_some() {
        return Err(Error::malformed("unterminated quote in array value"));
    }
    let last = current.trim();
    if !last.is_empty() {
        items.push(unescape(last));
    }
    Ok(items)
}

/// Decode a raw value into one logical string or an ordered list.
///
/// Empty values decode to an empty scalar. Malformed nesting (brackets
/// inside a single-line array, a continuation line without a list marker,
/// an unterminated quote) is an explicit error so callers decide whether to
/// fail or fall back.
pub fn parse_value(raw: &str) -> Result<SectionValue> {
    match classify_value(raw) {
        ValueKind::Empty => Ok(SectionValue::Scalar(String::new())),
        ValueKind::Scalar => Ok(SectionValue::Scalar(unescape(raw))),
        ValueKind::SingleLineArray => {
            let trimmed = raw.trim();
            let inner = &trimmed[1..trimmed.len() - 1];
            Ok(SectionValue::List(split_inline_items(inner)?))
        }
        ValueKind::MultiLineArray => {
            let mut items = Vec::new();
            for line in raw.trim().lines() {
                let item = line.trim_start();
                let Some(rest) = item.strip_prefix('-') else {
                    return Err(Error::malformed(format!(
                        "expected a list item, found `{item}`"
                    )));
                };
                items.push(unescape(rest));
            }
            Ok(SectionValue::List(items))
        }
    }
}

/// Serialize a value into the selected target encoding.
///
/// A scalar formatted with an array style yields a one-element array; a
/// list formatted with the scalar style falls back to a single-line array,
/// since a list has no scalar encoding.
pub fn format_value(value: &SectionValue, style: ValueStyle) -> String {
    let items: Vec<&str> = match value {
        SectionValue::Scalar(s) => vec![s.as_str()],
        SectionValue::List(v) => v.iter().map(String::as_str).collect(),
    };
    let inline = |items: &[&str]| format!("[{}]", items.join(", "));
    match style {
        ValueStyle::Scalar => match value {
            SectionValue::Scalar(s) => s.clone(),
            SectionValue::List(_) => inline(&items),
        },
        ValueStyle::SingleLineArray | ValueStyle::SingleStringToSingleLineArray => inline(&items),
        ValueStyle::MultiLineArray | ValueStyle::SingleStringToMultiLineArray => {
            let mut out = String::new();
            for item in items {
                out.push('\n');
                out.push_str(LIST_ITEM_PREFIX);
                out.push_str(item);
            }
            out
        }
    }
}

fn needs_escape(value: &str) -> bool {
    const STRUCTURAL_LEADING: &str = "[]{}&*!|>%@`\"'#-?:,";
    const LITERALS: [&str; 6] = ["true", "false", "null", "~", "yes", "no"];
    let Some(first) = value.chars().next() else {
        return false;
    };
    STRUCTURAL_LEADING.contains(first)
        || first.is_whitespace()
        || value.contains(": ")
        || value.ends_with(':')
        || LITERALS.iter().any(|lit| value.eq_ignore_ascii_case(lit))
}

/// Wrap `value` in `escape_char` when its text would otherwise be read as
/// structural, or unconditionally when `force` is set.
///
/// Already-escaped values are left unchanged; escaping never double-wraps.
/// When the value contains the requested quote character, the alternate
/// quote is used instead.
pub fn escape_if_needed(value: &str, escape_char: char, force: bool) -> String {
    if is_escaped(value) {
        return value.to_string();
    }
    if !force && !needs_escape(value) {
        return value.to_string();
    }
    let quote = if value.contains(escape_char) {
        match escape_char {
            '\'' => '"',
            _ => '\'',
        }
    } else {
        escape_char
    };
    format!("{quote}{value}{quote}")
}
