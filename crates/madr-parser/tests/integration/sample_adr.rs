//! End-to-end extraction of complete MADR documents.

use madr_parser::{parse, SectionRole};

use crate::common::{FULL_ADR, JUNIT_ADR};

// ----------------------------------------------------------------------------
// JUnit5 sample
// ----------------------------------------------------------------------------

#[test]
fn test_junit_title_and_context() {
    let record = parse(JUNIT_ADR).unwrap();

    assert_eq!(record.title, "Use Plain JUnit5 for advanced test assertions");
    assert_eq!(
        record.context,
        "How to write readable test assertions?\nHow to write readable test assertions for advanced tests?"
    );
}

#[test]
fn test_junit_considered_options() {
    let record = parse(JUNIT_ADR).unwrap();
    assert_eq!(
        record.considered_options.unwrap(),
        vec!["Plain JUnit5", "Hamcrest", "AssertJ"]
    );
}

#[test]
fn test_junit_consequences() {
    let record = parse(JUNIT_ADR).unwrap();

    assert_eq!(
        record.consequence_items(),
        vec![
            "Good, because tests are more readable",
            "Good, because more easy to write tests",
        ]
    );
    assert_eq!(
        record.decision_consequences.as_deref(),
        Some("Good, because tests are more readable\nGood, because more easy to write tests")
    );
}

#[test]
fn test_junit_decision_outcome_prefers_list() {
    let record = parse(JUNIT_ADR).unwrap();
    // The consequences list sits inside the outcome section.
    assert_eq!(
        record.decision_outcome,
        "Good, because tests are more readable\nGood, because more easy to write tests"
    );
}

#[test]
fn test_junit_pros_and_cons() {
    let record = parse(JUNIT_ADR).unwrap();
    let pros_cons = record.options_pros_and_cons.unwrap();

    assert_eq!(pros_cons.options().collect::<Vec<_>>(), vec!["Plain JUnit5", "Hamcrest"]);
    assert_eq!(
        pros_cons.get("Plain JUnit5").unwrap(),
        [
            "Good, because Junit5 is \"common Java knowledge\"",
            "Bad, because complex assertions tend to get hard to read",
        ]
    );
    assert_eq!(
        pros_cons.get("Hamcrest").unwrap(),
        [
            "Good, because offers advanced matchers",
            "Bad, because not full fluent API",
        ]
    );
    assert!(!pros_cons.contains_key("AssertJ"));
}

#[test]
fn test_junit_absent_fields() {
    let record = parse(JUNIT_ADR).unwrap();

    assert!(record.decision_drivers.is_none());
    assert!(record.decision_confirmation.is_none());
    assert!(record.more_info.is_none());
    assert!(record.metadata.is_none());
}

#[test]
fn test_junit_json_shape() {
    let record = parse(JUNIT_ADR).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["title"], "Use Plain JUnit5 for advanced test assertions");
    assert_eq!(json["consideredOptions"][2], "AssertJ");
    assert_eq!(json["optionsProsAndCons"]["Hamcrest"][1], "Bad, because not full fluent API");
    assert!(json["decisionDrivers"].is_null());
}

// ----------------------------------------------------------------------------
// Full MADR 4 record
// ----------------------------------------------------------------------------

#[test]
fn test_full_metadata() {
    let record = parse(FULL_ADR).unwrap();
    let meta = record.metadata.unwrap();

    assert_eq!(meta.status.as_deref(), Some("accepted"));
    assert_eq!(meta.date.as_deref(), Some("2024-03-01"));
    assert_eq!(meta.decision_makers, vec!["Alice", "Bob"]);
    assert_eq!(meta.consulted, vec!["Carol"]);
    assert_eq!(meta.informed, vec!["Dave"]);
}

#[test]
fn test_full_sections() {
    let record = parse(FULL_ADR).unwrap();

    assert_eq!(record.title, "Store decision records as Markdown");
    assert_eq!(record.context, "Decisions get lost in chat threads.");
    assert_eq!(
        record.decision_drivers.as_deref().unwrap(),
        ["Reviewable in pull requests", "No extra tooling"]
    );
    assert_eq!(
        record.considered_options.as_deref().unwrap(),
        ["MADR", "Wiki pages"]
    );
    assert_eq!(
        record.consequence_items(),
        vec![
            "Good, because history is versioned",
            "Bad, because non-developers need repository access",
        ]
    );
    assert_eq!(
        record.decision_confirmation.unwrap(),
        vec!["Every merged design change links a record"]
    );
    assert_eq!(
        record.more_info.as_deref(),
        Some("See the template at https://adr.github.io/madr/.")
    );
}

#[test]
fn test_full_pros_and_cons_keep_neutral_bullets() {
    let record = parse(FULL_ADR).unwrap();
    let pros_cons = record.options_pros_and_cons.unwrap();

    assert_eq!(pros_cons.len(), 2);
    assert_eq!(
        pros_cons.get("MADR").unwrap(),
        ["Good, because plain text", "Neutral, because needs a template"]
    );
    assert_eq!(pros_cons.get("Wiki pages").unwrap(), ["Bad, because drifts from the code"]);
}

#[test]
fn test_full_metadata_serialized() {
    let record = parse(FULL_ADR).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["metadata"]["status"], "accepted");
    assert_eq!(json["metadata"]["decision-makers"][1], "Bob");
}

#[test]
fn test_default_labels_cover_sample_headings() {
    let parser = madr_parser::MadrParser::default();
    let labels = parser.labels();

    assert!(labels.is_label(SectionRole::Context, "Context and Problem Statement"));
    assert!(labels.is_label(SectionRole::ProsAndCons, "Pros and Cons of the Options"));
    assert!(labels.is_label(SectionRole::Consequences, "Consequences"));
}
