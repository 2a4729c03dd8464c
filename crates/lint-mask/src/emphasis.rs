//! Emphasis-span rewriting that preserves the original markers
//!
//! Bold spans are claimed before italics so single-marker matching needs no
//! lookaround. Nested emphasis is unsupported: only the outer span is seen.

use std::ops::Range;

use crate::masker::overlaps;
use crate::recognizer::IgnoreKind;

/// Bold and italics spans of `text`, in document order.
///
/// Italics spans overlapping a bold span are dropped, so `**x**` never
/// doubles as `*x*`. Callers should mask code and math first; this function
/// only disambiguates emphasis markers from one another.
pub fn emphasis_spans(text: &str) -> (Vec<Range<usize>>, Vec<Range<usize>>) {
    let bold = IgnoreKind::Bold.match_spans(text);
    let italics = IgnoreKind::Italics
        .match_spans(text)
        .into_iter()
        .filter(|span| !bold.iter().any(|b| overlaps(b, span)))
        .collect();
    (bold, italics)
}

fn apply_to_spans(
    text: &str,
    spans: &[Range<usize>],
    marker_len: usize,
    rewrite: impl Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        let open = &text[span.start..span.start + marker_len];
        let close = &text[span.end - marker_len..span.end];
        let interior = &text[span.start + marker_len..span.end - marker_len];
        out.push_str(&text[last..span.start]);
        out.push_str(open);
        out.push_str(&rewrite(interior));
        out.push_str(close);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Apply `rewrite` to the interior of every italics span, keeping the
/// original marker characters exactly.
pub fn rewrite_italics(text: &str, rewrite: impl Fn(&str) -> String) -> String {
    let (_, italics) = emphasis_spans(text);
    apply_to_spans(text, &italics, 1, rewrite)
}

/// Apply `rewrite` to the interior of every bold span, keeping the original
/// marker characters exactly.
pub fn rewrite_bold(text: &str, rewrite: impl Fn(&str) -> String) -> String {
    let (bold, _) = emphasis_spans(text);
    apply_to_spans(text, &bold, 2, rewrite)
}
