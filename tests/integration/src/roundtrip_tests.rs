//! Round-trip fidelity tests across crate boundaries
//!
//! The masking and frontmatter layers both promise byte-exact restoration:
//! unmasking after an identity rewrite reproduces the input, and rewriting
//! a section with its own raw value reproduces the block. These tests hold
//! those promises over realistic documents rather than single constructs.

use lint_core::{Executor, Registry, Settings};
use lint_frontmatter::{
    SectionValue, ValueStyle, body, escape_if_needed, format_value, get_section_value,
    parse_value, set_section_value,
};
use lint_mask::{IgnoreKind, mask, unmask};
use pretty_assertions::assert_eq;

const KITCHEN_SINK: &str = "\
---
title: Note
tags: [a, b]
---
# Heading with `inline code`

A [link](https://example.com) and [[wiki link]] and ![img](pic.png)
and ![[embedded.png]] plus #a-tag and $x^2$ inline math.

$$
block = math
$$

```rust
let x = \"fenced\"; // #not-a-tag
```

Some _italics_ and **bold** to finish.
";

#[test]
fn mask_then_unmask_restores_every_region_kind() {
    let mask = mask(KITCHEN_SINK, &IgnoreKind::DEFAULT_ORDER);
    assert!(!mask.regions.is_empty());
    assert_eq!(unmask(&mask.text, &mask.regions), KITCHEN_SINK);
}

#[test]
fn masked_text_exposes_no_protected_content() {
    let mask = mask(KITCHEN_SINK, &IgnoreKind::DEFAULT_ORDER);
    for needle in ["title: Note", "fenced", "wiki link", "#a-tag", "x^2"] {
        assert!(!mask.text.contains(needle), "leaked {needle:?}");
    }
}

const BLOCK_BODY: &str = "\
title: My Note
aliases:
  - one
  - two
tags: [a, b]
empty:
scalar-quoted: \"has: colon\"
";

#[test]
fn rewriting_each_section_with_its_own_value_is_identity() {
    for key in ["title", "aliases", "tags", "empty", "scalar-quoted"] {
        let raw = get_section_value(BLOCK_BODY, key).unwrap();
        assert_eq!(set_section_value(BLOCK_BODY, key, &raw), BLOCK_BODY, "key {key}");
    }
}

#[test]
fn decode_then_reencode_in_native_style_is_identity() {
    let cases = [
        ("title", ValueStyle::Scalar),
        ("tags", ValueStyle::SingleLineArray),
        ("aliases", ValueStyle::MultiLineArray),
    ];
    for (key, style) in cases {
        let raw = get_section_value(BLOCK_BODY, key).unwrap();
        let value = parse_value(&raw).unwrap();
        assert_eq!(format_value(&value, style), raw, "key {key}");
    }
}

#[test]
fn encoding_conversion_preserves_items() {
    let raw = get_section_value(BLOCK_BODY, "aliases").unwrap();
    let value = parse_value(&raw).unwrap();
    let inline = format_value(&value, ValueStyle::SingleLineArray);
    assert_eq!(inline, "[one, two]");
    assert_eq!(parse_value(&inline).unwrap(), value);
}

#[test]
fn escaped_scalar_decodes_back_to_original() {
    let original = "topic: detail";
    let escaped = escape_if_needed(original, '"', false);
    assert_eq!(escaped, "\"topic: detail\"");
    assert_eq!(
        parse_value(&escaped).unwrap(),
        SectionValue::Scalar(original.to_string())
    );
}

#[test]
fn pipeline_edits_touch_only_their_own_keys() {
    let text = "\
---
custom:   odd   spacing
tags: [a,   b]
aliases:
  - old
title-alias: old
---
# New
";
    let registry = Registry::with_builtin_rules().unwrap();
    let out = Executor::new(&registry).run(text, &Settings::default()).unwrap();
    assert_eq!(
        out,
        "\
---
custom:   odd   spacing
tags: [a,   b]
aliases:
  - New
title-alias: New
---
# New
"
    );
}

#[test]
fn pipeline_without_applicable_rules_is_byte_identity() {
    let text = "\
---
notes: |
  nothing here is a rule target
---
plain paragraph with no urls, emphasis, or trailing spaces
";
    let registry = Registry::with_builtin_rules().unwrap();
    let out = Executor::new(&registry).run(text, &Settings::default()).unwrap();
    assert_eq!(out, text);
    assert_eq!(
        body(&out).unwrap(),
        "notes: |\n  nothing here is a rule target\n"
    );
}
