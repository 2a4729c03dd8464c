//! Reading, writing, and removing named sections of a block body
//!
//! All operations take the block body (see [`crate::block::body`]) and a
//! literal, case-sensitive key. Edits replace exactly the span the read
//! operation addresses; every other key's raw text stays byte-identical.

use std::ops::Range;

use tracing::trace;

struct SectionSpan {
    /// The `key: ...` line itself.
    line: Range<usize>,
    /// Byte just after the colon.
    value_start: usize,
    /// End of the last continuation line (exclusive, without its newline).
    end: usize,
}

fn locate(body: &str, key: &str) -> Option<SectionSpan> {
    let mut pos = 0;
    while pos < body.len() {
        let line_end = body[pos..].find('\n').map_or(body.len(), |i| pos + i);
        let line = &body[pos..line_end];
        if line.starts_with(key) && line[key.len()..].starts_with(':') {
            let value_start = pos + key.len() + 1;
            let rest = &body[value_start..line_end];
            let mut end = line_end;
            if rest.trim().is_empty() {
                // Empty remainder: the value is the indented continuation.
                let mut next = line_end + 1;
                while next < body.len() {
                    let next_end = body[next..].find('\n').map_or(body.len(), |i| next + i);
                    if body[next..].starts_with(' ') || body[next..].starts_with('\t') {
                        end = next_end;
                        next = next_end + 1;
                    } else {
                        break;
                    }
                }
            }
            return Some(SectionSpan {
                line: pos..line_end,
                value_start,
                end,
            });
        }
        if line_end == body.len() {
            break;
        }
        pos = line_end + 1;
    }
    None
}

/// Raw value text of `key`, or `None` when the key is absent.
///
/// A non-empty remainder of the key line is returned trimmed of a single
/// leading space. An empty remainder collects the immediately following
/// indented lines verbatim (markers included), returned with their leading
/// newline, until the next zero-indent key or end of body. A key with no
/// value at all yields an empty string.
pub fn get_section_value(body: &str, key: &str) -> Option<String> {
    let span = locate(body, key)?;
    let rest = &body[span.value_start..span.line.end];
    if !rest.trim().is_empty() {
        return Some(rest.strip_prefix(' ').unwrap_or(rest).to_string());
    }
    if span.end > span.line.end {
        return Some(body[span.line.end..span.end].to_string());
    }
    Some(String::new())
}

fn render_entry(key: &str, raw: &str) -> String {
    if raw.is_empty() {
        format!("{key}:")
    } else if raw.starts_with('\n') {
        format!("{key}:{raw}")
    } else {
        format!("{key}: {raw}")
    }
}

/// Replace the value of `key` with `raw`, appending a new entry at the end
/// of the body when the key is absent.
///
/// `raw` uses the same conventions [`get_section_value`] returns: a
/// single-line value is written as `key: raw`; a value starting with a
/// newline is written as the key line followed by its continuation lines.
pub fn set_section_value(body: &str, key: &str, raw: &str) -> String {
    match locate(body, key) {
        Some(span) => {
            trace!(key, "replacing section value");
            let entry = render_entry(key, raw);
            let mut out = String::with_capacity(body.len() + entry.len());
            out.push_str(&body[..span.line.start]);
            out.push_str(&entry);
            out.push_str(&body[span.end..]);
            out
        }
        None => {
            trace!(key, "appending new section");
            let mut out = body.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&render_entry(key, raw));
            out.push('\n');
            out
        }
    }
}

/// Delete `key` and its continuation lines, leaving no orphan blank line.
pub fn remove_section(body: &str, key: &str) -> String {
    let Some(span) = locate(body, key) else {
        return body.to_string();
    };
    let mut start = span.line.start;
    let mut end = span.end;
    if body[end..].starts_with('\n') {
        end += 1;
        // The section sat between blank lines: keep only one of them.
        if body[..start].ends_with("\n\n") && body[end..].starts_with('\n') {
            end += 1;
        }
    } else if start > 0 {
        // Section at end of body without trailing newline.
        start -= 1;
    }
    let mut out = String::with_capacity(body.len());
    out.push_str(&body[..start]);
    out.push_str(&body[end..]);
    out
}

/// First candidate key present in the body, for both read and write within
/// a single pass; when none is present, the first (canonical) candidate.
///
/// Returns `None` only for an empty candidate list.
pub fn resolve_key<'a>(body: &str, candidates: &'a [&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|key| get_section_value(body, key).is_some())
        .or_else(|| candidates.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BODY: &str = "title: My Note\naliases:\n  - one\n  - two\ntags: [a, b]\nempty:\n";

    #[test]
    fn get_scalar_value() {
        assert_eq!(get_section_value(BODY, "title").as_deref(), Some("My Note"));
    }

    #[test]
    fn get_single_line_array_value() {
        assert_eq!(get_section_value(BODY, "tags").as_deref(), Some("[a, b]"));
    }

    #[test]
    fn get_multi_line_value_includes_markers() {
        assert_eq!(
            get_section_value(BODY, "aliases").as_deref(),
            Some("\n  - one\n  - two")
        );
    }

    #[test]
    fn get_empty_value() {
        assert_eq!(get_section_value(BODY, "empty").as_deref(), Some(""));
    }

    #[test]
    fn get_absent_key_is_none() {
        assert_eq!(get_section_value(BODY, "missing"), None);
    }

    #[test]
    fn key_match_is_exact_not_prefix() {
        let body = "aliases: [x]\n";
        assert_eq!(get_section_value(body, "alias"), None);
    }

    #[test]
    fn set_unchanged_value_round_trips() {
        for key in ["title", "aliases", "tags", "empty"] {
            let value = get_section_value(BODY, key).unwrap();
            assert_eq!(set_section_value(BODY, key, &value), BODY, "key {key}");
        }
    }

    #[test]
    fn set_scalar_leaves_other_keys_untouched() {
        let updated = set_section_value(BODY, "title", "Renamed");
        assert_eq!(
            updated,
            "title: Renamed\naliases:\n  - one\n  - two\ntags: [a, b]\nempty:\n"
        );
    }

    #[test]
    fn set_replaces_multi_line_continuation() {
        let updated = set_section_value(BODY, "aliases", "\n  - three");
        assert_eq!(
            updated,
            "title: My Note\naliases:\n  - three\ntags: [a, b]\nempty:\n"
        );
    }

    #[test]
    fn set_converts_scalar_to_multi_line() {
        let body = "aliases: old\nnext: 1\n";
        let updated = set_section_value(body, "aliases", "\n  - new");
        assert_eq!(updated, "aliases:\n  - new\nnext: 1\n");
    }

    #[test]
    fn set_appends_absent_key_at_end() {
        let updated = set_section_value("title: x\n", "new-key", "value");
        assert_eq!(updated, "title: x\nnew-key: value\n");
    }

    #[test]
    fn set_appends_to_empty_body() {
        assert_eq!(set_section_value("", "key", "v"), "key: v\n");
    }

    #[test]
    fn remove_scalar_section() {
        let updated = remove_section(BODY, "title");
        assert_eq!(updated, "aliases:\n  - one\n  - two\ntags: [a, b]\nempty:\n");
    }

    #[test]
    fn remove_multi_line_section() {
        let updated = remove_section(BODY, "aliases");
        assert_eq!(updated, "title: My Note\ntags: [a, b]\nempty:\n");
    }

    #[test]
    fn remove_last_section() {
        let updated = remove_section(BODY, "empty");
        assert_eq!(updated, "title: My Note\naliases:\n  - one\n  - two\ntags: [a, b]\n");
    }

    #[test]
    fn remove_between_blank_lines_leaves_single_blank() {
        let body = "a: 1\n\nb: 2\n\nc: 3\n";
        assert_eq!(remove_section(body, "b"), "a: 1\n\nc: 3\n");
    }

    #[test]
    fn remove_absent_key_is_identity() {
        assert_eq!(remove_section(BODY, "missing"), BODY);
    }

    #[test]
    fn resolve_key_prefers_present_candidate() {
        let body = "alias: [x]\n";
        assert_eq!(resolve_key(body, &["aliases", "alias"]), Some("alias"));
    }

    #[test]
    fn resolve_key_falls_back_to_canonical() {
        assert_eq!(resolve_key("other: 1\n", &["aliases", "alias"]), Some("aliases"));
    }
}
