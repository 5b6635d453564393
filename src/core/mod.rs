//! Core conversion modules
//!
//! This module contains the conversion engine:
//! - `html2latex`: markup tree walker rewriting HTML-like tables into LaTeX

pub mod html2latex;

// Re-export main types and functions from html2latex
pub use html2latex::{
    convert_node, markup_to_latex, markup_to_latex_with_options, parse_markup, postprocess,
    D2LOptions, MarkupNode,
};
