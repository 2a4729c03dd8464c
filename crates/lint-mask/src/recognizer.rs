//! Recognizers for protected Markdown regions
//!
//! Each [`IgnoreKind`] is an independent regex scan yielding non-overlapping
//! spans. Adding a new protected construct means adding a pattern and a
//! catalog entry here; the masker's substitution and restoration logic stays
//! untouched.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static FRONTMATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\r?\n(?s:.*?)\r?\n---(?:\r?\n|\z)").unwrap());

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^ {0,3}(?:`{3,}[^\n]*\n.*?^ {0,3}`{3,}|~{3,}[^\n]*\n.*?^ {0,3}~{3,})[^\n]*$")
        .unwrap()
});

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``[^`]+``|`[^`\n]+`").unwrap());

static BLOCK_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\$(?s:.*?)\$\$").unwrap());

static INLINE_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[^$\n]+\$").unwrap());

static WIKI_IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[\[[^\]\n]*\]\]").unwrap());

static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[[^\]\n]*\]\([^)\n]*\)").unwrap());

static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[[^\]\n]*\]\]").unwrap());

static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]\n]*\]\([^)\n]*\)").unwrap());

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(#[\p{L}\p{N}_/-]+)").unwrap());

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*\n]+\*\*|__[^_\n]+__").unwrap());

static ITALICS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*[^*\n]+\*|_[^_\n]+_").unwrap());

/// A kind of protected region that rewrites must not alter.
///
/// Recognizers are independent of one another; precedence between kinds is
/// decided by the order the caller passes them to the masker
/// (first-match-wins). [`IgnoreKind::DEFAULT_ORDER`] lists every kind from
/// most- to least-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreKind {
    /// The leading `---` delimited metadata block.
    Frontmatter,
    /// Backtick or tilde fenced code blocks.
    FencedCode,
    /// Single or double backtick inline code.
    InlineCode,
    /// `$$ ... $$` math blocks.
    BlockMath,
    /// `$ ... $` inline math.
    InlineMath,
    /// `![[...]]` embedded images.
    WikiImage,
    /// `![...](...)` images.
    Image,
    /// `[[...]]` double-bracket links.
    WikiLink,
    /// `[...](...)` links.
    Link,
    /// `#tag` hashtags.
    Tag,
    /// `**...**` or `__...__` spans.
    Bold,
    /// `*...*` or `_..._` spans. Must be ordered after [`IgnoreKind::Bold`].
    Italics,
}

impl IgnoreKind {
    /// Every kind, ordered from most- to least-specific.
    pub const DEFAULT_ORDER: [IgnoreKind; 12] = [
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
        IgnoreKind::Bold,
        IgnoreKind::Italics,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Frontmatter => &FRONTMATTER,
            Self::FencedCode => &FENCED_CODE,
            Self::InlineCode => &INLINE_CODE,
            Self::BlockMath => &BLOCK_MATH,
            Self::InlineMath => &INLINE_MATH,
            Self::WikiImage => &WIKI_IMAGE,
            Self::Image => &IMAGE,
            Self::WikiLink => &WIKI_LINK,
            Self::Link => &LINK,
            Self::Tag => &TAG,
            Self::Bold => &BOLD,
            Self::Italics => &ITALICS,
        }
    }

    /// Capture group holding the span, when narrower than the full match.
    fn span_group(self) -> Option<usize> {
        match self {
            // The tag pattern anchors on leading whitespace that is not part
            // of the protected span.
            Self::Tag => Some(1),
            _ => None,
        }
    }

    /// Scan `text` and return the byte spans this kind protects, in order.
    pub fn match_spans(self, text: &str) -> Vec<Range<usize>> {
        let pattern = self.pattern();
        match self.span_group() {
            Some(group) => pattern
                .captures_iter(text)
                .filter_map(|cap| cap.get(group).map(|m| m.range()))
                .collect(),
            None => pattern.find_iter(text).map(|m| m.range()).collect(),
        }
    }
}
