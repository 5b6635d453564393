//! LaTeX tokens emitted by the markup walker and the longtable serializer
//!
//! All output fragments are assembled from these constants so the walker,
//! the serializer and the tests agree on the exact spelling.

// ============================================================================
// Inline Formatting
// ============================================================================

/// Paragraph separator used for `<p>` and `<br>`
pub const NEWLINE: &str = "\\newline";

/// Bold emphasis command (`<b>`)
pub const TEXTBF: &str = "\\textbf";

/// Italic emphasis command (`<i>`)
pub const TEXTIT: &str = "\\textit";

/// Underline command (`<u>`)
pub const UNDERLINE: &str = "\\underline";

// ============================================================================
// Table Structure
// ============================================================================

/// Row terminator
pub const ROW_END: &str = "\\\\";

/// Column separator
pub const COL_SEP: &str = "&";

/// Booktabs rule above the header row
pub const TOPRULE: &str = "\\toprule";

/// Booktabs rule between rows
pub const MIDRULE: &str = "\\midrule";

/// Booktabs rule below the last row
pub const BOTTOMRULE: &str = "\\bottomrule";

/// Environment used for tables nested inside a cell
pub const NESTED_ENV: &str = "tabular";

/// Environment used for the outer, page-breaking table
pub const LONGTABLE_ENV: &str = "longtable";

/// Column token used for every column of a nested table
pub const NESTED_COLUMN_TOKEN: char = 'l';

/// Emitted in place of a nested table that has no rows
pub const INCOMPLETE_TABLE: &str = "got an incomplete table here";

/// Footer label on pages where a longtable continues
pub const CONTINUED_LABEL: &str = "Continued on next page";

// ============================================================================
// Document Wrapping
// ============================================================================

/// Packages the generated tables rely on
pub const REQUIRED_PACKAGES: &[&str] = &["longtable", "booktabs"];

/// Document class used when wrapping output in a full document
pub const DEFAULT_DOCUMENT_CLASS: &str = "article";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_end_is_double_backslash() {
        assert_eq!(ROW_END.len(), 2);
        assert!(ROW_END.chars().all(|c| c == '\\'));
    }

    #[test]
    fn test_required_packages() {
        assert!(REQUIRED_PACKAGES.contains(&"longtable"));
        assert!(REQUIRED_PACKAGES.contains(&"booktabs"));
    }
}
