//! Force Value Escape rule
//!
//! Wraps the scalar values of configured frontmatter keys in the shared
//! escape character. Runs in the trailing special-order pass so it sees the
//! final shape every normal metadata rule produced.

use crate::descriptor::{RuleCategory, RuleDescriptor};
use crate::error::Result;
use crate::options::{ResolvedOptions, RuleOption};
use crate::settings::ESCAPE_CHAR_OPTION;
use lint_frontmatter::{
    ValueKind, body, classify_value, escape_if_needed, get_section_value, replace_body,
    set_section_value,
};

const KEYS_OPTION: &str = "keys";

pub fn descriptor() -> RuleDescriptor {
    RuleDescriptor::new(
        "Force Value Escape",
        RuleCategory::Metadata,
        "Always wraps the values of the listed frontmatter keys in the escape character",
        vec![RuleOption::text_list(
            KEYS_OPTION,
            "Frontmatter keys whose scalar values are always escaped",
            Vec::new(),
        )],
        rewrite,
    )
    .with_special_order()
}

fn rewrite(text: &str, options: &ResolvedOptions) -> Result<String> {
    let Some(block_body) = body(text) else {
        return Ok(text.to_string());
    };
    let quote = options
        .text(ESCAPE_CHAR_OPTION)
        .chars()
        .next()
        .unwrap_or('"');

    let mut updated = block_body.to_string();
    for key in options.text_list(KEYS_OPTION) {
        let Some(raw) = get_section_value(&updated, key) else {
            continue;
        };
        if classify_value(&raw) != ValueKind::Scalar {
            continue;
        }
        let escaped = escape_if_needed(&raw, quote, true);
        if escaped != raw {
            updated = set_section_value(&updated, key, &escaped);
        }
    }
    Ok(replace_body(text, &updated))
}
