//! Markdown structure for MADR extraction.
//!
//! This crate sits between raw Markdown text and the MADR extractors. It
//! knows nothing about decision records: it turns text into a tree of typed
//! nodes and strips front matter, and the extractors in `madr-parser`
//! pattern-match over the result.
//!
//! # Modules
//!
//! - [`markdown`]: Node tree construction and front matter extraction
//!   - [`markdown::ast`]: [`Node`], [`parse_ast`], [`flatten_text`]
//!   - [`markdown::frontmatter`]: [`extract_frontmatter`]

pub mod markdown;

// Re-export commonly used types
pub use markdown::{extract_frontmatter, flatten_text, parse_ast, FrontmatterResult, Node};
