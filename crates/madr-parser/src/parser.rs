//! Parser entry points.

use madr_content::{extract_frontmatter, parse_ast};
use madr_core::{LabelTable, ParserConfig, Result};

use crate::metadata::AdrMetadata;
use crate::pros_cons::extract_options_pros_and_cons;
use crate::record::{assemble, ParsedRecord, SectionLookup};
use crate::sections::extract_sections;
use crate::title::extract_title;

/// Extracts [`ParsedRecord`]s using a fixed label table.
///
/// A parser holds no per-document state, so one instance can be shared
/// across threads and reused for any number of documents.
///
/// # Example
///
/// ```rust
/// use madr_core::{LabelTable, SectionRole};
/// use madr_parser::MadrParser;
///
/// let labels = LabelTable::default().with_labels(SectionRole::Context, ["Kontext"]);
/// let parser = MadrParser::new(labels);
///
/// let record = parser.parse("# Titel\n\n## Kontext\n\nWarum?\n").unwrap();
/// assert_eq!(record.context, "Warum?");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MadrParser {
    labels: LabelTable,
}

impl MadrParser {
    /// Create a parser with the given labels.
    pub fn new(labels: LabelTable) -> Self {
        Self { labels }
    }

    /// Create a parser from configuration, validating its labels.
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        Ok(Self::new(config.label_table()?))
    }

    /// The labels this parser recognizes.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Extract a record from MADR Markdown.
    ///
    /// Fails only when the document has no level-1 heading.
    pub fn parse(&self, markdown: &str) -> Result<ParsedRecord> {
        let frontmatter = extract_frontmatter(markdown);
        let metadata = AdrMetadata::from_frontmatter(&frontmatter);
        let nodes = parse_ast(frontmatter.body());

        let title = extract_title(&nodes)?;
        log::debug!("Parsing decision record '{title}' ({} top-level nodes)", nodes.len());

        let sections = extract_sections(&nodes, &self.labels);
        let options_pros_and_cons = extract_options_pros_and_cons(&nodes, &self.labels);
        let lookup = SectionLookup::new(&sections, &self.labels);

        Ok(assemble(title, &lookup, options_pros_and_cons, metadata))
    }
}

/// Extract a record using the stock MADR labels.
///
/// # Example
///
/// ```rust
/// let record = madr_parser::parse("# Use Rust\n\n## Decision Outcome\n\nChosen.\n").unwrap();
/// assert_eq!(record.title, "Use Rust");
/// assert_eq!(record.decision_outcome, "Chosen.");
///
/// assert!(madr_parser::parse("no title here").is_err());
/// ```
pub fn parse(markdown: &str) -> Result<ParsedRecord> {
    MadrParser::default().parse(markdown)
}
