//! Trailing Spaces rule
//!
//! Strips trailing whitespace per line. Two-space hard line breaks can be
//! preserved via the rule's option; whitespace inside code and math is
//! masked and therefore never touched.

use crate::descriptor::{RuleCategory, RuleDescriptor};
use crate::error::Result;
use crate::options::{ResolvedOptions, RuleOption};
use lint_mask::{IgnoreKind, rewrite_ignoring};

const TWO_SPACE_OPTION: &str = "two-space-line-break";

const IGNORED: [IgnoreKind; 4] = [
    IgnoreKind::Frontmatter,
    IgnoreKind::FencedCode,
    IgnoreKind::InlineCode,
    IgnoreKind::BlockMath,
];

pub fn descriptor() -> RuleDescriptor {
    RuleDescriptor::new(
        "Trailing Spaces",
        RuleCategory::Spacing,
        "Removes extra whitespace at the end of lines",
        vec![RuleOption::bool(
            TWO_SPACE_OPTION,
            "Keep two-space hard line breaks",
            false,
        )],
        rewrite,
    )
}

fn rewrite(text: &str, options: &ResolvedOptions) -> Result<String> {
    let keep_breaks = options.bool(TWO_SPACE_OPTION);
    rewrite_ignoring(text, &IGNORED, |masked| {
        let lines: Vec<String> = masked
            .split('\n')
            .map(|line| {
                let trimmed = line.trim_end();
                let trailing = &line[trimmed.len()..];
                if keep_breaks
                    && !trimmed.is_empty()
                    && trailing.len() >= 2
                    && trailing.chars().all(|c| c == ' ')
                {
                    format!("{trimmed}  ")
                } else {
                    trimmed.to_string()
                }
            })
            .collect();
        Ok::<String, crate::Error>(lines.join("\n"))
    })
}
