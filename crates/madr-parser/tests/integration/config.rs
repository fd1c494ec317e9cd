//! Parsers configured with non-default labels.

use std::io::Write;

use madr_parser::{LabelTable, MadrParser, ParserConfig, SectionRole};
use tempfile::NamedTempFile;

use crate::common::{GERMAN_ADR, GERMAN_LABELS, JUNIT_ADR};

#[test]
fn test_german_labels_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(GERMAN_LABELS.as_bytes()).unwrap();

    let config = ParserConfig::load(file.path()).unwrap();
    let parser = MadrParser::from_config(&config).unwrap();
    let record = parser.parse(GERMAN_ADR).unwrap();

    assert_eq!(record.title, "Einfache JUnit5-Assertions verwenden");
    assert_eq!(record.context, "Wie schreibt man lesbare Assertions?");
    assert_eq!(record.considered_options.unwrap(), vec!["Plain JUnit5", "AssertJ"]);
    assert_eq!(
        record.options_pros_and_cons.unwrap().get("AssertJ").unwrap(),
        ["Gut, weil flüssige API"]
    );
}

#[test]
fn test_german_labels_ignore_english_headings() {
    let config = ParserConfig::from_toml_str(GERMAN_LABELS).unwrap();
    let parser = MadrParser::from_config(&config).unwrap();
    let record = parser.parse(JUNIT_ADR).unwrap();

    assert_eq!(record.context, "");
    assert!(record.considered_options.is_none());
    assert!(record.options_pros_and_cons.is_none());
    // Roles left out of the file keep their defaults.
    assert!(record.decision_consequences.is_some());
}

#[test]
fn test_extra_label_alongside_default() {
    let labels = LabelTable::default().with_labels(
        SectionRole::Context,
        ["Context and Problem Statement", "Background"],
    );
    let parser = MadrParser::new(labels);

    let record = parser.parse("# T\n\n## Background\n\nLegacy heading.\n").unwrap();
    assert_eq!(record.context, "Legacy heading.");
}

#[test]
fn test_round_trip_default_config_file() {
    let config = ParserConfig::from_label_table(&LabelTable::default());
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config.to_toml_string().unwrap().as_bytes()).unwrap();

    let loaded = ParserConfig::load(file.path()).unwrap();
    let record = MadrParser::from_config(&loaded).unwrap().parse(JUNIT_ADR).unwrap();
    assert_eq!(record, madr_parser::parse(JUNIT_ADR).unwrap());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ParserConfig::load(dir.path().join("labels.toml")).unwrap_err();
    assert!(err.to_string().contains("labels.toml"));
}
