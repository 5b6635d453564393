//! # frametex
//!
//! Render tabular data whose cells carry inline HTML as LaTeX `longtable`s.
//!
//! ## Features
//!
//! - **Longtable Skeleton**: booktabs rules, repeated header, optional caption
//! - **Inline Markup**: `<b>`, `<i>`, `<u>`, `<p>` and `<br>` inside cells
//! - **Nested Tables**: HTML tables in a cell become `tabular` environments
//! - **CSV Input**: load data with the `data-loading` feature
//! - **Diagnostics**: report empty nested tables, ragged rows, unknown tags
//!
//! The generated LaTeX needs `\usepackage{longtable}` and
//! `\usepackage{booktabs}` in the including document.
//!
//! ## Usage Examples
//!
//! ### Markup Conversion
//!
//! ```rust
//! use frametex::markup_to_latex;
//!
//! let latex = markup_to_latex("Total: <b>42</b>").unwrap();
//! assert!(latex.contains(r"\textbf{42}"));
//! ```
//!
//! ### Table Conversion
//!
//! ```rust
//! use frametex::{dataframe_to_latex, D2LOptions, DataTable};
//!
//! let table = DataTable::new(["Name", "Note"])
//!     .with_row(["Alice", "<i>first</i>"])
//!     .unwrap();
//! let latex = dataframe_to_latex(&table, &D2LOptions::new().with_caption("People")).unwrap();
//! assert!(latex.contains(r"\caption{People}"));
//! assert!(latex.contains(r"\textit{first}"));
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static tokens and tag tables
pub mod data;

/// Feature modules - data sources around the converter
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

use log::debug;

// Re-export core conversion functions
pub use crate::core::html2latex;
pub use crate::core::html2latex::{
    collapse_spaces, convert_node, insert_row_rules, markup_to_latex,
    markup_to_latex_with_options, parse_markup, postprocess, D2LOptions, MarkupNode,
};

// Re-export data modules
pub use data::constants;
pub use data::tags::{CellKind, TagKind};

// Re-export feature modules
pub use features::dataframe::{self, DataTable};
pub use features::longtable::{self, to_longtable, LongtableWriter};

// Re-export utilities
pub use utils::diagnostics::{self, check_markup, CheckResult};
pub use utils::error::{ConversionError, ConversionOutput, ConversionResult, ConversionWarning};

/// Render a table as a longtable skeleton and convert its cell markup
///
/// # Arguments
/// * `table` - Column names and rows; cells may contain inline HTML
/// * `options` - Caption, column format and document options
///
/// # Returns
/// LaTeX longtable code
pub fn dataframe_to_latex(table: &DataTable, options: &D2LOptions) -> ConversionResult<String> {
    let skeleton = to_longtable(
        table,
        options.caption.as_deref(),
        options.column_format.as_deref(),
    );
    debug!("longtable skeleton:\n{}", skeleton);
    markup_to_latex_with_options(&skeleton, options)
}

/// Like [`dataframe_to_latex`], also reporting markup problems as warnings
pub fn dataframe_to_latex_with_diagnostics(
    table: &DataTable,
    options: &D2LOptions,
) -> ConversionResult<ConversionOutput> {
    let skeleton = to_longtable(
        table,
        options.caption.as_deref(),
        options.column_format.as_deref(),
    );
    markup_to_latex_with_diagnostics(&skeleton, options)
}

/// Convert markup, also reporting markup problems as warnings
pub fn markup_to_latex_with_diagnostics(
    input: &str,
    options: &D2LOptions,
) -> ConversionResult<ConversionOutput> {
    let content = markup_to_latex_with_options(input, options)?;
    let warnings = check_markup(input).to_warnings();
    Ok(ConversionOutput::with_warnings(content, warnings))
}

/// Read comma-separated CSV and convert it
#[cfg(feature = "data-loading")]
pub fn csv_to_latex(input: &str, options: &D2LOptions) -> ConversionResult<String> {
    let table = DataTable::from_csv_str(input)?;
    dataframe_to_latex(&table, options)
}
