//! Title Alias rule
//!
//! Mirrors the document's first H1 into the frontmatter aliases array. The
//! previously inserted title is remembered in a tracking key so a renamed
//! heading replaces its old alias instead of accumulating a new one.

use std::sync::LazyLock;

use regex::Regex;

use crate::descriptor::{RuleCategory, RuleDescriptor};
use crate::error::Result;
use crate::options::{ResolvedOptions, RuleOption};
use crate::settings::{ARRAY_STYLE_OPTION, ESCAPE_CHAR_OPTION};
use lint_frontmatter::{
    SectionValue, ValueKind, ValueStyle, body, classify_value, ensure_block_exists,
    escape_if_needed, format_value, get_section_value, parse_value, replace_body, resolve_key,
    set_section_value,
};
use lint_mask::IgnoreKind;

const TRACKING_KEY_OPTION: &str = "tracking-key";
const DEFAULT_TRACKING_KEY: &str = "title-alias";

/// Accepted alias key spellings, in priority order; the first is canonical
/// when a new entry must be created.
const ALIAS_KEYS: [&str; 2] = ["aliases", "alias"];

static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# +(.+?) *$").unwrap());

pub fn descriptor() -> RuleDescriptor {
    RuleDescriptor::new(
        "Title Alias",
        RuleCategory::Metadata,
        "Keeps the frontmatter aliases array in sync with the first H1 heading",
        vec![RuleOption::text(
            TRACKING_KEY_OPTION,
            "Frontmatter key remembering the alias inserted from the title",
            DEFAULT_TRACKING_KEY,
        )],
        rewrite,
    )
}

fn first_heading(text: &str) -> Option<String> {
    let fences = IgnoreKind::FencedCode.match_spans(text);
    let frontmatter = IgnoreKind::Frontmatter.match_spans(text);
    H1.captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .find(|m| {
            let start = m.range().start;
            !fences
                .iter()
                .chain(frontmatter.iter())
                .any(|span| span.start <= start && start < span.end)
        })
        .map(|m| m.as_str().to_string())
}

fn forced_array_style(options: &ResolvedOptions) -> ValueStyle {
    if options.text(ARRAY_STYLE_OPTION) == "single-line" {
        ValueStyle::SingleStringToSingleLineArray
    } else {
        ValueStyle::SingleStringToMultiLineArray
    }
}

fn escape_char(options: &ResolvedOptions) -> char {
    options.text(ESCAPE_CHAR_OPTION).chars().next().unwrap_or('"')
}

fn rewrite(text: &str, options: &ResolvedOptions) -> Result<String> {
    let Some(title) = first_heading(text) else {
        return Ok(text.to_string());
    };
    let text = ensure_block_exists(text);
    let Some(block_body) = body(&text) else {
        return Ok(text);
    };

    let mut updated = block_body.to_string();
    let alias_key = resolve_key(&updated, &ALIAS_KEYS).unwrap_or(ALIAS_KEYS[0]);
    let tracking_key = match options.text(TRACKING_KEY_OPTION) {
        "" => DEFAULT_TRACKING_KEY,
        key => key,
    };
    let quote = escape_char(options);

    let previous = get_section_value(&updated, tracking_key)
        .map(|raw| parse_value(&raw))
        .transpose()?
        .and_then(|value| match value {
            SectionValue::Scalar(s) if !s.is_empty() => Some(s),
            _ => None,
        });

    let new_raw = match get_section_value(&updated, alias_key) {
        None => format_value(
            &SectionValue::Scalar(escape_if_needed(&title, quote, false)),
            forced_array_style(options),
        ),
        Some(raw) => {
            let kind = classify_value(&raw);
            let mut items = match parse_value(&raw)? {
                SectionValue::Scalar(s) if s.is_empty() => Vec::new(),
                SectionValue::Scalar(s) => vec![s],
                SectionValue::List(items) => items,
            };
            match previous
                .as_ref()
                .and_then(|p| items.iter().position(|item| item == p))
            {
                Some(index) => items[index] = title.clone(),
                None => {
                    if !items.iter().any(|item| item == &title) {
                        items.insert(0, title.clone());
                    }
                }
            }
            let escaped: Vec<String> = items
                .into_iter()
                .map(|item| escape_if_needed(&item, quote, false))
                .collect();
            let style = match kind {
                ValueKind::SingleLineArray => ValueStyle::SingleLineArray,
                ValueKind::MultiLineArray => ValueStyle::MultiLineArray,
                ValueKind::Scalar | ValueKind::Empty => forced_array_style(options),
            };
            format_value(&SectionValue::List(escaped), style)
        }
    };

    updated = set_section_value(&updated, alias_key, &new_raw);
    updated = set_section_value(&updated, tracking_key, &escape_if_needed(&title, quote, false));
    Ok(replace_body(&text, &updated))
}
