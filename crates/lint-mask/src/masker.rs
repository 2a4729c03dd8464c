//! Placeholder substitution and restoration

use std::ops::Range;

use tracing::trace;

use crate::recognizer::IgnoreKind;

// Private-use-area delimiters keep placeholders inert: no recognizer pattern
// and no shipped rule heuristic matches them.
const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// One protected span replaced by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedRegion {
    /// The inert token substituted into the text.
    pub placeholder: String,
    /// The original text to restore verbatim.
    pub original: String,
}

/// Result of masking: the rewritten-safe text plus the restore list.
#[derive(Debug, Clone)]
pub struct Mask {
    /// Input text with every claimed span replaced by a placeholder.
    pub text: String,
    /// Restore list, in document order.
    pub regions: Vec<MaskedRegion>,
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
}

pub(crate) fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Replace every span matched by `kinds` with an inert placeholder.
///
/// Kinds are applied first-match-wins: a span overlapping one already
/// claimed by an earlier kind is skipped, so callers must order kinds from
/// most- to least-specific (see [`IgnoreKind::DEFAULT_ORDER`]).
pub fn mask(text: &str, kinds: &[IgnoreKind]) -> Mask {
    let mut claimed: Vec<Range<usize>> = Vec::new();
    for kind in kinds {
        for span in kind.match_spans(text) {
            if claimed.iter().any(|c| overlaps(c, &span)) {
                continue;
            }
            trace!(?kind, start = span.start, end = span.end, "claimed region");
            claimed.push(span);
        }
    }
    claimed.sort_by_key(|span| span.start);

    let mut masked = String::with_capacity(text.len());
    let mut regions = Vec::with_capacity(claimed.len());
    let mut last = 0;
    for (index, span) in claimed.iter().enumerate() {
        let placeholder = placeholder(index);
        masked.push_str(&text[last..span.start]);
        masked.push_str(&placeholder);
        regions.push(MaskedRegion {
            placeholder,
            original: text[span.clone()].to_string(),
        });
        last = span.end;
    }
    masked.push_str(&text[last..]);

    Mask {
        text: masked,
        regions,
    }
}

/// Restore every placeholder to its original text.
///
/// Placeholders are located by exact content match, never by cached offsets,
/// so a rewrite may freely move them. A placeholder the rewrite deleted has
/// nothing left to restore and is skipped.
pub fn unmask(text: &str, regions: &[MaskedRegion]) -> String {
    let mut restored = text.to_string();
    for region in regions {
        restored = restored.replace(&region.placeholder, &region.original);
    }
    restored
}

/// Run a fallible rewrite over `text` with the given kinds masked out.
pub fn rewrite_ignoring<E>(
    text: &str,
    kinds: &[IgnoreKind],
    rewrite: impl FnOnce(&str) -> Result<String, E>,
) -> Result<String, E> {
    let mask = mask(text, kinds);
    let rewritten = rewrite(&mask.text)?;
    Ok(unmask(&rewritten, &mask.regions))
}
