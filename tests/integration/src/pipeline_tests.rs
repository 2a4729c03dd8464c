//! End-to-end tests for the full rule pipeline
//!
//! These exercise the Executor over the built-in registry: document
//! scenarios, ordering guarantees, masking safety, and failure tagging.

use lint_core::{
    Error, Executor, Registry, ResolvedOptions, RuleCategory, RuleDescriptor, Settings,
};
use lint_frontmatter::{body, get_section_value, set_section_value};
use pretty_assertions::assert_eq;

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().compact())
        .try_init();
}

fn run_builtin(text: &str) -> String {
    init_tracing();
    let registry = Registry::with_builtin_rules().unwrap();
    Executor::new(&registry).run(text, &Settings::default()).unwrap()
}

#[test]
fn title_creates_block_with_alias_and_tracking_key() {
    let out = run_builtin("# Title\n");
    assert_eq!(
        out,
        "---\naliases:\n  - Title\ntitle-alias: Title\n---\n# Title\n"
    );
}

#[test]
fn renamed_title_replaces_tracked_alias() {
    let text = "---\naliases: [alias1, alias2]\ntitle-alias: alias1\n---\n# Title\n";
    let out = run_builtin(text);
    assert_eq!(
        out,
        "---\naliases: [Title, alias2]\ntitle-alias: Title\n---\n# Title\n"
    );
}

#[test]
fn disabled_rules_all_is_a_complete_no_op() {
    let text = "---\ndisabled rules: all\n---\n# Title\n\nbare https://example.com  \n";
    assert_eq!(run_builtin(text), text);
}

#[test]
fn disabled_rules_array_skips_only_listed_rules() {
    let text = "---\ndisabled rules: [title-alias]\n---\n# Title\n\ngo to https://example.com\n";
    let out = run_builtin(text);
    // Title Alias skipped, No Bare Urls still applied.
    assert!(!out.contains("aliases"));
    assert!(out.contains("<https://example.com>"));
}

#[test]
fn fenced_code_survives_the_whole_pipeline() {
    let text = "# Doc\n\n```\nhttp://example.com  \n_raw_ **markers**\n```\n";
    let out = run_builtin(text);
    assert!(out.contains("```\nhttp://example.com  \n_raw_ **markers**\n```"));
}

#[test]
fn pipeline_is_idempotent() {
    let text = "# Title\n\nvisit https://example.com now  \nwith _emphasis_ here\n";
    let once = run_builtin(text);
    let twice = run_builtin(&once);
    assert_eq!(twice, once);
}

fn set_marker_normal(text: &str, _: &ResolvedOptions) -> lint_core::Result<String> {
    let block = body(text).map(ToString::to_string).unwrap_or_default();
    let updated = set_section_value(&block, "marker", "normal");
    Ok(lint_frontmatter::replace_body(text, &updated))
}

fn set_marker_special(text: &str, _: &ResolvedOptions) -> lint_core::Result<String> {
    let block = body(text).map(ToString::to_string).unwrap_or_default();
    let updated = set_section_value(&block, "marker", "special");
    Ok(lint_frontmatter::replace_body(text, &updated))
}

#[test]
fn special_order_rule_wins_the_same_key() {
    init_tracing();
    let mut registry = Registry::new();
    // Registered special-first to show registration order does not matter.
    registry
        .register(
            RuleDescriptor::new(
                "A Special Marker",
                RuleCategory::Metadata,
                "",
                vec![],
                set_marker_special,
            )
            .with_special_order(),
        )
        .unwrap();
    registry
        .register(RuleDescriptor::new(
            "Z Normal Marker",
            RuleCategory::Metadata,
            "",
            vec![],
            set_marker_normal,
        ))
        .unwrap();

    let out = Executor::new(&registry)
        .run("---\nmarker: none\n---\nbody\n", &Settings::default())
        .unwrap();
    let block = body(&out).unwrap();
    assert_eq!(get_section_value(block, "marker").as_deref(), Some("special"));
}

fn always_fails(_: &str, _: &ResolvedOptions) -> lint_core::Result<String> {
    Err(Error::Frontmatter(lint_frontmatter::Error::malformed(
        "unreadable section",
    )))
}

#[test]
fn failure_is_attributed_to_the_rule() {
    init_tracing();
    let mut registry = Registry::new();
    registry
        .register(RuleDescriptor::new(
            "Broken Rule",
            RuleCategory::Content,
            "",
            vec![],
            always_fails,
        ))
        .unwrap();

    let error = Executor::new(&registry)
        .run("body\n", &Settings::default())
        .unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Broken Rule"), "got: {message}");
    assert!(message.contains("unreadable section"), "got: {message}");
}

#[test]
fn settings_snapshot_controls_rule_options() {
    init_tracing();
    let registry = Registry::with_builtin_rules().unwrap();
    let settings = Settings::from_yaml_str(
        r"
rules:
  Emphasis Style:
    style: underscore
",
    )
    .unwrap();
    let out = Executor::new(&registry)
        .run("some *italic* text\n", &settings)
        .unwrap();
    assert_eq!(out, "some _italic_ text\n");
}
