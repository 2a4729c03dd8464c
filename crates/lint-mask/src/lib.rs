//! Reversible masking of protected Markdown regions
//!
//! Rewrite rules must never touch code, links, tags, math, emphasis spans,
//! or the frontmatter block. This crate locates those regions with a catalog
//! of independent recognizers ([`IgnoreKind`]), substitutes inert
//! placeholders, lets the caller run an arbitrary rewrite over the masked
//! text, and restores the originals verbatim afterwards.
//!
//! Restoration matches placeholders by content, never by cached offsets, so
//! a rewrite that moves (or even deletes) a placeholder cannot corrupt the
//! surrounding text.
//!
//! # Known limitation
//!
//! Emphasis markers nested inside one another (bold inside italics and vice
//! versa) are not supported: only the outer span is claimed, and behavior on
//! the inner span is unspecified.

pub mod emphasis;
pub mod masker;
pub mod recognizer;

pub use emphasis::{emphasis_spans, rewrite_bold, rewrite_italics};
pub use masker::{Mask, MaskedRegion, mask, rewrite_ignoring, unmask};
pub use recognizer::IgnoreKind;
