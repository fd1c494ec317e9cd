//! MADR Core: shared errors, section labels, and configuration.
//!
//! This crate provides the foundational types used across all MADR crates.
//! It has no internal MADR dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`labels`]: Semantic section roles and the heading labels that name them
//! - [`config`]: TOML-backed parser configuration

pub mod config;
pub mod error;
pub mod labels;

// Re-export key types at crate root for convenience
pub use config::{LabelsConfig, ParserConfig};
pub use error::{Error, Result};
pub use labels::{LabelTable, SectionRole};
