//! Markup to LaTeX converter
//!
//! This module rewrites an HTML-like string (a LaTeX table skeleton whose
//! cells carry inline HTML) into plain LaTeX. It uses `html5ever` to parse
//! the markup into a [`MarkupNode`] tree, walks the tree, and then normalizes
//! the assembled text.

pub mod context;
mod markup;
pub mod node;
pub mod postprocess;
pub mod table;

pub use context::{D2LOptions, DEFAULT_MAX_DEPTH};
pub use markup::convert_node;
pub use node::{parse_markup, MarkupNode, SiblingPosition};
pub use postprocess::{collapse_spaces, insert_row_rules, postprocess};

use log::debug;

use crate::data::constants::REQUIRED_PACKAGES;
use crate::utils::error::ConversionResult;

/// Convert an HTML-like table string to LaTeX
pub fn markup_to_latex(input: &str) -> ConversionResult<String> {
    markup_to_latex_with_options(input, &D2LOptions::default())
}

/// Convert an HTML-like table string to LaTeX with custom options
pub fn markup_to_latex_with_options(input: &str, options: &D2LOptions) -> ConversionResult<String> {
    let root = parse_markup(input)?;
    let raw = convert_node(&root, options)?;
    let latex = postprocess(&raw);
    debug!(
        "converted {} bytes of markup into {} bytes of LaTeX",
        input.len(),
        latex.len()
    );

    if options.full_document {
        Ok(wrap_document(&latex, options))
    } else {
        Ok(latex)
    }
}

/// Wrap converted tables in a minimal document that loads the packages
/// they need
pub fn wrap_document(body: &str, options: &D2LOptions) -> String {
    use std::fmt::Write;
    let mut output = String::new();

    let _ = writeln!(output, "\\documentclass{{{}}}", options.document_class);
    for package in REQUIRED_PACKAGES {
        let _ = writeln!(output, "\\usepackage{{{}}}", package);
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "\\begin{{document}}");
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", body.trim_end());
    let _ = writeln!(output);
    let _ = write!(output, "\\end{{document}}");

    output
}
