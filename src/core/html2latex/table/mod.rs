//! Nested Table Emission
//!
//! Fragments for HTML tables embedded in cells: column formats derived from
//! the first row, booktabs rules between rows, and cell separators.
//!
//! # Architecture
//!
//! ```text
//! <table> -> ColumnFormat (first row width) -> rows (rules) -> cells (&) -> tabular
//! ```

mod colspec;
mod layout;
mod rule;

#[cfg(test)]
mod tests;

// Re-export public API
pub use colspec::{ColumnAlign, ColumnFormat};
pub use layout::{wrap_cell, wrap_nested_table, wrap_row};
pub use rule::RuleStyle;
