//! Title extraction.

use madr_content::Node;
use madr_core::{Error, Result};

/// Flattened text of the first level-1 heading among `nodes`.
///
/// The whole sequence is searched, so a title that follows other content is
/// still found. Fails with [`Error::MissingTitle`] when there is none.
///
/// # Example
///
/// ```rust
/// use madr_content::parse_ast;
/// use madr_parser::extract_title;
///
/// let nodes = parse_ast("Preamble.\n\n# Use Plain JUnit5\n\n# Another\n");
/// assert_eq!(extract_title(&nodes).unwrap(), "Use Plain JUnit5");
///
/// let nodes = parse_ast("## Only a section\n");
/// assert!(extract_title(&nodes).unwrap_err().is_missing_title());
/// ```
pub fn extract_title(nodes: &[Node]) -> Result<String> {
    nodes
        .iter()
        .find(|node| node.heading_level() == Some(1))
        .map(Node::flatten_text)
        .ok_or(Error::MissingTitle)
}
