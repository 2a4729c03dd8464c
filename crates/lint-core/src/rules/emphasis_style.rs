//! Emphasis Style rule
//!
//! Normalizes italics and bold markers to one configured style. Emphasis
//! nested inside same- or cross-kind markers is unsupported; only the outer
//! span is rewritten.

use std::ops::Range;

use crate::descriptor::{RuleCategory, RuleDescriptor};
use crate::error::Result;
use crate::options::{ResolvedOptions, RuleOption};
use lint_mask::{IgnoreKind, emphasis_spans, rewrite_ignoring};

const STYLE_OPTION: &str = "style";
const STYLES: &[&str] = &["asterisk", "underscore"];

const IGNORED: [IgnoreKind; 9] = [
    IgnoreKind::Frontmatter,
    IgnoreKind::FencedCode,
    IgnoreKind::InlineCode,
    IgnoreKind::BlockMath,
    IgnoreKind::InlineMath,
    IgnoreKind::WikiImage,
    IgnoreKind::Image,
    IgnoreKind::WikiLink,
    IgnoreKind::Link,
];

pub fn descriptor() -> RuleDescriptor {
    RuleDescriptor::new(
        "Emphasis Style",
        RuleCategory::Content,
        "Normalizes italics and bold markers to one style",
        vec![RuleOption::choice(
            STYLE_OPTION,
            "Marker character used for emphasis",
            STYLES,
            "asterisk",
        )],
        rewrite,
    )
}

fn rewrite(text: &str, options: &ResolvedOptions) -> Result<String> {
    let (italic_marker, bold_marker) = if options.text(STYLE_OPTION) == "underscore" {
        ("_", "__")
    } else {
        ("*", "**")
    };
    rewrite_ignoring(text, &IGNORED, |masked| {
        let (bold, italics) = emphasis_spans(masked);
        let mut spans: Vec<(Range<usize>, &str)> = bold
            .into_iter()
            .map(|span| (span, bold_marker))
            .chain(italics.into_iter().map(|span| (span, italic_marker)))
            .collect();
        spans.sort_by_key(|(span, _)| span.start);

        let mut out = String::with_capacity(masked.len());
        let mut last = 0;
        for (span, marker) in spans {
            let interior = &masked[span.start + marker.len()..span.end - marker.len()];
            out.push_str(&masked[last..span.start]);
            out.push_str(marker);
            out.push_str(interior);
            out.push_str(marker);
            last = span.end;
        }
        out.push_str(&masked[last..]);
        Ok::<String, crate::Error>(out)
    })
}
