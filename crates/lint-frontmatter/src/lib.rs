//! Round-trip-faithful editing of Markdown frontmatter blocks
//!
//! A frontmatter block is the `---` delimited key/value section at the very
//! top of a document. This crate locates the block, reads and writes named
//! sections, and converts raw section values between the four supported
//! encodings (empty, scalar, single-line array, multi-line array) without
//! disturbing any other key's raw text or the delimiters.
//!
//! The store is deliberately line-oriented rather than a full YAML parser:
//! re-serializing an unmodified block is byte-identical to the input, and
//! editing one key leaves every other key untouched.

pub mod block;
pub mod error;
pub mod section;
pub mod value;

pub use block::{DELIMITER, body, ensure_block_exists, find_block, replace_body};
pub use error::{Error, Result};
pub use section::{get_section_value, remove_section, resolve_key, set_section_value};
pub use value::{
    SectionValue, ValueKind, ValueStyle, classify_value, escape_if_needed, format_value,
    parse_value,
};
