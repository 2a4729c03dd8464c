//! Locating and replacing the frontmatter block

use std::ops::Range;

/// Delimiter line opening and closing a frontmatter block.
pub const DELIMITER: &str = "---";

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\r') == DELIMITER
}

/// Byte range of the block body (between, excluding, the delimiter lines).
///
/// A block exists only when the document's first line is exactly the
/// delimiter and a closing delimiter line follows.
pub fn find_block(text: &str) -> Option<Range<usize>> {
    let first_end = text.find('\n')?;
    if !is_delimiter(&text[..first_end]) {
        return None;
    }
    let body_start = first_end + 1;

    let mut pos = body_start;
    loop {
        let line_end = text[pos..].find('\n').map_or(text.len(), |i| pos + i);
        if is_delimiter(&text[pos..line_end]) {
            return Some(body_start..pos);
        }
        if line_end == text.len() {
            return None;
        }
        pos = line_end + 1;
    }
}

/// The block body as a slice, if a block exists.
pub fn body(text: &str) -> Option<&str> {
    find_block(text).map(|range| &text[range])
}

/// Insert an empty block at the very start when none exists.
///
/// An existing block is never disturbed.
pub fn ensure_block_exists(text: &str) -> String {
    if find_block(text).is_some() {
        return text.to_string();
    }
    format!("{DELIMITER}\n{DELIMITER}\n{text}")
}

/// Replace the block body, creating the block when absent.
///
/// The body is normalized to end with a newline so the closing delimiter
/// stays on its own line.
pub fn replace_body(text: &str, new_body: &str) -> String {
    let mut body = new_body.to_string();
    if !body.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }
    match find_block(text) {
        Some(range) => {
            let mut out = String::with_capacity(text.len() + body.len());
            out.push_str(&text[..range.start]);
            out.push_str(&body);
            out.push_str(&text[range.end..]);
            out
        }
        None => format!("{DELIMITER}\n{body}{DELIMITER}\n{text}"),
    }
}
