//! No Bare Urls rule
//!
//! Wraps bare `http(s)` URLs in angle brackets. Code, math, links, images,
//! tags, and the frontmatter block are masked first, so a URL inside any of
//! them is never touched.

use std::sync::LazyLock;

use regex::Regex;

use crate::descriptor::{RuleCategory, RuleDescriptor};
use crate::error::Result;
use crate::options::ResolvedOptions;
use lint_mask::{IgnoreKind, rewrite_ignoring};

// A URL ends at whitespace, angle brackets, or a masking placeholder
// delimiter (U+E000/U+E001), so an adjacent masked span is never swallowed.
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>\x{E000}\x{E001}]+").unwrap());

const IGNORED: [IgnoreKind; 10] = [
    IgnoreKind::Frontmatter,
    IgnoreKind::FencedCode,
    IgnoreKind::InlineCode,
    IgnoreKind::BlockMath,
    IgnoreKind::InlineMath,
    IgnoreKind::WikiImage,
    IgnoreKind::Image,
    IgnoreKind::WikiLink,
    IgnoreKind::Link,
    IgnoreKind::Tag,
];

pub fn descriptor() -> RuleDescriptor {
    RuleDescriptor::new(
        "No Bare Urls",
        RuleCategory::Content,
        "Wraps bare URLs in angle brackets",
        vec![],
        rewrite,
    )
}

fn rewrite(text: &str, _options: &ResolvedOptions) -> Result<String> {
    rewrite_ignoring(text, &IGNORED, |masked| {
        let mut out = String::with_capacity(masked.len());
        let mut last = 0;
        for m in BARE_URL.find_iter(masked) {
            if masked[..m.start()].ends_with('<') {
                continue;
            }
            let mut end = m.end();
            // Sentence punctuation after a URL is not part of it.
            while end > m.start()
                && matches!(masked.as_bytes()[end - 1], b'.' | b',' | b';' | b':' | b'!' | b'?' | b')')
            {
                end -= 1;
            }
            out.push_str(&masked[last..m.start()]);
            out.push('<');
            out.push_str(&masked[m.start()..end]);
            out.push('>');
            last = end;
        }
        out.push_str(&masked[last..]);
        Ok::<String, crate::Error>(out)
    })
}
