//! Data layer - Static tokens and tag tables
//!
//! This module contains all static data used by the converter:
//! - LaTeX tokens for rules, separators and inline commands
//! - The tag vocabulary of the markup walker

pub mod constants;
pub mod tags;

// Re-export commonly used items
pub use constants::{INCOMPLETE_TABLE, REQUIRED_PACKAGES};
pub use tags::{is_table_section, CellKind, TagKind, TAG_KINDS};
