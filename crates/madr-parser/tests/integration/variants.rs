//! Documents that stray from the template.

use madr_parser::{parse, Error};

#[test]
fn test_empty_document_has_no_title() {
    assert!(matches!(parse("").unwrap_err(), Error::MissingTitle));
}

#[test]
fn test_title_only_after_front_matter() {
    let record = parse("---\nstatus: proposed\n---\n# Draft\n").unwrap();
    assert_eq!(record.title, "Draft");
    assert_eq!(record.context, "");
    assert_eq!(record.decision_outcome, "");
}

#[test]
fn test_first_title_wins() {
    let record = parse("# First\n\n# Second\n").unwrap();
    assert_eq!(record.title, "First");
}

#[test]
fn test_title_inline_markup_flattened() {
    let record = parse("# Use `serde` for *all* [formats](https://serde.rs)\n").unwrap();
    assert_eq!(record.title, "Use serde for all formats");
}

#[test]
fn test_prose_options_are_not_a_list() {
    let record = parse("# T\n\n## Considered Options\n\nWe only looked at one thing.\n").unwrap();
    assert!(record.considered_options.is_none());
}

#[test]
fn test_pros_and_cons_stop_at_next_section() {
    let md = "# T\n\n## Pros and Cons of the Options\n\n### A\n\n* Good\n\n## More Information\n\n### B\n\n* Not an option\n";
    let record = parse(md).unwrap();
    let pros_cons = record.options_pros_and_cons.unwrap();

    assert_eq!(pros_cons.len(), 1);
    assert!(!pros_cons.contains_key("B"));
    assert_eq!(record.more_info.as_deref(), Some("Not an option"));
}

#[test]
fn test_option_without_bullets_kept() {
    let record =
        parse("# T\n\n## Pros and Cons of the Options\n\n### Lonely\n\nJust prose.\n").unwrap();
    let pros_cons = record.options_pros_and_cons.unwrap();
    assert!(pros_cons.get("Lonely").unwrap().is_empty());
}

#[test]
fn test_invalid_front_matter_still_parses_body() {
    let record = parse("---\n{{invalid: yaml: here}}\n---\n# Still here\n").unwrap();
    assert_eq!(record.title, "Still here");
    assert!(record.metadata.is_none());
}

#[test]
fn test_crlf_document() {
    let md = "# Windows\r\n\r\n## Considered Options\r\n\r\n* A\r\n* B\r\n";
    let record = parse(md).unwrap();
    assert_eq!(record.title, "Windows");
    assert_eq!(record.considered_options.unwrap(), vec!["A", "B"]);
}

#[test]
fn test_leading_thematic_break_is_not_front_matter() {
    let md = "---\n\n# Title\n\n## Context and Problem Statement\n\nWhy.\n\n---\n\nFooter.\n";
    let record = parse(md).unwrap();

    assert_eq!(record.title, "Title");
    // The closing rule is a thematic break inside the section.
    assert_eq!(record.context, "Why.\nFooter.");
    assert!(record.metadata.is_none());
}
