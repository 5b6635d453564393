//! Text passes applied once to the fully assembled output

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::constants::{MIDRULE, ROW_END};

lazy_static! {
    /// Two or more consecutive spaces
    static ref SPACE_RUN: Regex = Regex::new(r" {2,}").unwrap();

    /// A row terminator preceded by a space and followed by a newline and a space
    static ref BARE_ROW_END: Regex = Regex::new(r" \\\\\n ").unwrap();
}

/// Collapse every run of two or more spaces into a single space.
///
/// Newlines are left alone so the row-rule pass can still see line starts.
pub fn collapse_spaces(input: &str) -> String {
    SPACE_RUN.replace_all(input, " ").into_owned()
}

/// Insert a mid rule after every row terminator that ends a line followed
/// by an indented line: ` \\` + newline + space becomes `\\ \midrule` + newline.
pub fn insert_row_rules(input: &str) -> String {
    let replacement = format!("{} {}\n", ROW_END, MIDRULE);
    BARE_ROW_END
        .replace_all(input, regex::NoExpand(&replacement))
        .into_owned()
}

/// Run both passes in order
pub fn postprocess(input: &str) -> String {
    insert_row_rules(&collapse_spaces(input))
}
