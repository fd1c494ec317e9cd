//! Shared documents for the integration tests.

#![allow(dead_code)]

/// The JUnit5 assertion-library decision from the MADR template examples.
pub const JUNIT_ADR: &str = r#"# Use Plain JUnit5 for advanced test assertions

## Context and Problem Statement

How to write readable test assertions?
How to write readable test assertions for advanced tests?

## Considered Options

* Plain JUnit5
* Hamcrest
* AssertJ

## Decision Outcome

Chosen option: "Plain JUnit5", because comes out best.

### Consequences

* Good, because tests are more readable
* Good, because more easy to write tests

## Pros and Cons of the Options

### Plain JUnit5

* Good, because Junit5 is "common Java knowledge"
* Bad, because complex assertions tend to get hard to read

### Hamcrest

* Good, because offers advanced matchers
* Bad, because not full fluent API
"#;

/// A full MADR 4 record with front matter and every optional section.
pub const FULL_ADR: &str = r#"---
status: accepted
date: 2024-03-01
decision-makers:
  - Alice
  - Bob
consulted: Carol
informed: [Dave]
---

# Store decision records as Markdown

## Context and Problem Statement

Decisions get lost in chat threads.

## Decision Drivers

* Reviewable in pull requests
* No extra tooling

## Considered Options

* MADR
* Wiki pages

## Decision Outcome

Chosen option: "MADR", because it lives next to the code.

### Consequences

* Good, because history is versioned
* Bad, because non-developers need repository access

### Confirmation

* Every merged design change links a record

## Pros and Cons of the Options

### MADR

* Good, because plain text
* Neutral, because needs a template

### Wiki pages

* Bad, because drifts from the code

## More Information

See the template at https://adr.github.io/madr/.
"#;

/// The JUnit5 record with German section headings.
pub const GERMAN_ADR: &str = r#"# Einfache JUnit5-Assertions verwenden

## Kontext

Wie schreibt man lesbare Assertions?

## Optionen

* Plain JUnit5
* AssertJ

## Vor- und Nachteile

### AssertJ

* Gut, weil flüssige API
"#;

/// TOML labels matching [`GERMAN_ADR`].
pub const GERMAN_LABELS: &str = r#"
[labels]
context = ["Kontext"]
considered_options = ["Optionen"]
pros_and_cons = ["Vor- und Nachteile"]
"#;
