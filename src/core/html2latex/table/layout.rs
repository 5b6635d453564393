//! Row, cell and environment fragments for tables nested in cells
//!
//! Each function takes the already converted content of an element and
//! returns the fragment the walker appends for it. Leading newlines and
//! trailing spaces are part of the output format; spaces are collapsed later
//! by the post-processing pass.

use super::colspec::ColumnFormat;
use super::rule::RuleStyle;
use crate::core::html2latex::node::SiblingPosition;
use crate::data::constants::{COL_SEP, NESTED_ENV, NEWLINE, ROW_END};

/// Fragment for a `<tr>`.
///
/// The first row is the header: it gets a top rule before and a mid rule
/// after. Interior rows are followed by a mid rule, the last row by the row
/// terminator only.
pub fn wrap_row(content: &str, position: SiblingPosition) -> String {
    if position.is_first() {
        format!(
            "\n{} \n{} {} \n{} ",
            RuleStyle::TopRule.to_latex(),
            content,
            ROW_END,
            RuleStyle::MidRule.to_latex()
        )
    } else if !position.is_last() {
        format!(
            "\n{} {} {} ",
            content,
            ROW_END,
            RuleStyle::MidRule.to_latex()
        )
    } else {
        format!("\n{} {}", content, ROW_END)
    }
}

/// Fragment for a `<td>` or `<th>`: every cell after the first is prefixed
/// with the column separator.
pub fn wrap_cell(content: &str, position: SiblingPosition) -> String {
    if position.is_first() {
        format!("{} ", content)
    } else {
        format!(" {} {} ", COL_SEP, content)
    }
}

/// Fragment for a non-empty nested `<table>`, set off by paragraph breaks
pub fn wrap_nested_table(format: &ColumnFormat, content: &str) -> String {
    format!(
        "{nl} \n\\begin{{{env}}}{{{format}}} {content} \n{bottom} \n\\end{{{env}}} {nl}",
        nl = NEWLINE,
        env = NESTED_ENV,
        format = format,
        content = content,
        bottom = RuleStyle::BottomRule.to_latex(),
    )
}
