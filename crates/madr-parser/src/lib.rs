//! Extract typed records from Markdown Architectural Decision Records.
//!
//! The parser reads a document written in the MADR template and returns a
//! [`ParsedRecord`]: the title, the standard sections as text or lists, the
//! pros and cons of each option, and any front matter. Extraction is
//! permissive. A document without a level-1 heading is the only failure;
//! missing or oddly shaped sections become empty or absent fields, leaving
//! judgement about decision quality to downstream tools.
//!
//! # Pipeline
//!
//! 1. [`madr_content::extract_frontmatter`] splits off YAML front matter
//! 2. [`madr_content::parse_ast`] builds the node tree
//! 3. [`extract_title`] finds the level-1 heading
//! 4. [`split_sections`] and [`normalize_sections`] bucket and normalize
//!    the level-2 sections
//! 5. [`extract_options_pros_and_cons`] collects per-option bullets
//! 6. the record is assembled by section role, using a
//!    [`LabelTable`](madr_core::LabelTable)
//!
//! # Example
//!
//! ```rust
//! let markdown = concat!(
//!     "# Use Plain JUnit5 for advanced test assertions\n\n",
//!     "## Considered Options\n\n",
//!     "* Plain JUnit5\n* Hamcrest\n* AssertJ\n\n",
//!     "## Pros and Cons of the Options\n\n",
//!     "### Hamcrest\n\n",
//!     "* Good, because offers advanced matchers\n",
//!     "* Bad, because not full fluent API\n",
//! );
//!
//! let record = madr_parser::parse(markdown).unwrap();
//! assert_eq!(record.title, "Use Plain JUnit5 for advanced test assertions");
//! assert_eq!(
//!     record.considered_options.unwrap(),
//!     vec!["Plain JUnit5", "Hamcrest", "AssertJ"]
//! );
//! let pros_cons = record.options_pros_and_cons.unwrap();
//! assert_eq!(pros_cons.get("Hamcrest").unwrap().len(), 2);
//! ```

pub mod metadata;
pub mod parser;
pub mod pros_cons;
pub mod record;
pub mod sections;
pub mod title;

mod proptests;

pub use metadata::AdrMetadata;
pub use parser::{parse, MadrParser};
pub use pros_cons::{extract_options_pros_and_cons, OptionsProsCons};
pub use record::ParsedRecord;
pub use sections::{
    extract_sections, normalize_section, normalize_sections, split_sections, RawSections,
    SectionValue, SectionsMap,
};
pub use title::extract_title;

// Re-export the types callers need to configure a parser
pub use madr_core::{Error, LabelTable, ParserConfig, Result, SectionRole};
