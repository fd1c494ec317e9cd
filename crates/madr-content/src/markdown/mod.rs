//! Markdown node tree and front matter utilities.
//!
//! - [`ast`]: Folds `pulldown-cmark` events into a closed [`Node`] tree and
//!   flattens nodes to plain text
//! - [`frontmatter`]: Splits a leading YAML block from the Markdown body
//!
//! # Example
//!
//! ```rust
//! use madr_content::markdown::{extract_frontmatter, parse_ast};
//!
//! let content = "---\nstatus: accepted\n---\n\n# Use Plain JUnit5\n";
//! let split = extract_frontmatter(content);
//! let nodes = parse_ast(split.body());
//!
//! assert_eq!(split.get_str("status"), Some("accepted"));
//! assert_eq!(nodes[0].flatten_text(), "Use Plain JUnit5");
//! ```

pub mod ast;
pub mod frontmatter;

pub use ast::{flatten_text, parse_ast, Node};
pub use frontmatter::{extract_frontmatter, FrontmatterResult};
