//! Markup diagnostics using tree analysis
//!
//! This module reports problems in the HTML-like input that the converter
//! handles silently. It can identify:
//!
//! - Nested tables without rows (rendered as a placeholder)
//! - Rows whose width differs from the first row of their table
//! - Tags outside the supported set (rendered as plain text)
//! - Paragraphs in first position, which render without line breaks
//!
//! ## Example
//!
//! ```rust
//! use frametex::diagnostics::{check_markup, DiagnosticLevel};
//!
//! let result = check_markup("<table></table>");
//! assert_eq!(result.warnings, 1);
//! ```

use fxhash::FxHashMap;
use std::fmt;

use crate::core::html2latex::node::{parse_markup, MarkupNode};
use crate::data::tags::TagKind;
use crate::utils::error::ConversionWarning;

/// Elements every parsed document has
const STRUCTURAL_TAGS: &[&str] = &["html", "head", "body"];

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - conversion might not be perfect
    Warning,
    /// Error - conversion will fail
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Element path, e.g. `body > table > tr[2]`
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            source_text: None,
            suggestion: None,
        }
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: level: message
        //         --> path
        //         = help: suggestion

        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(ref source) = self.source_text {
            write!(f, "\n  --> {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

impl From<&Diagnostic> for ConversionWarning {
    fn from(diag: &Diagnostic) -> Self {
        ConversionWarning {
            message: match diag.source_text {
                Some(ref path) => format!("{} ({})", diag.message, path),
                None => diag.message.clone(),
            },
            line: None,
            suggestion: diag.suggestion.clone(),
        }
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Warnings and errors as conversion warnings; notes are left out
    pub fn to_warnings(&self) -> Vec<ConversionWarning> {
        self.diagnostics
            .iter()
            .filter(|d| d.level >= DiagnosticLevel::Warning)
            .map(ConversionWarning::from)
            .collect()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check HTML-like markup for issues
pub fn check_markup(input: &str) -> CheckResult {
    let mut result = CheckResult::new();

    match parse_markup(input) {
        Ok(root) => check_tree(&root, &mut result),
        Err(err) => result.add(Diagnostic::new(DiagnosticLevel::Error, err.to_string())),
    }

    result
}

/// Check an already parsed tree
pub fn check_tree(root: &MarkupNode, result: &mut CheckResult) {
    let mut unsupported: FxHashMap<String, (usize, String)> = FxHashMap::default();
    check_node(root, &root.tag, &mut unsupported, result);

    let mut unsupported: Vec<_> = unsupported.into_iter().collect();
    unsupported.sort_by(|a, b| a.0.cmp(&b.0));
    for (tag, (count, first_path)) in unsupported {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Info,
                format!(
                    "tag <{}> is not supported, its text is kept ({} occurrence{})",
                    tag,
                    count,
                    if count == 1 { "" } else { "s" }
                ),
            )
            .with_source(first_path),
        );
    }
}

/// Check a node's children recursively
fn check_node(
    node: &MarkupNode,
    path: &str,
    unsupported: &mut FxHashMap<String, (usize, String)>,
    result: &mut CheckResult,
) {
    for (idx, child) in node.children.iter().enumerate() {
        let child_path = format!("{} > {}[{}]", path, child.tag, idx + 1);

        match child.kind() {
            TagKind::Table => check_table(child, &child_path, result),
            TagKind::Paragraph if idx == 0 && !child.implied => {
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Info,
                        format!(
                            "paragraph at the start of <{}> is rendered without line breaks",
                            node.tag
                        ),
                    )
                    .with_source(&child_path)
                    .with_suggestion("Put text before the paragraph or use <br> for a break"),
                );
            }
            TagKind::Other if !STRUCTURAL_TAGS.contains(&child.tag.as_str()) => {
                let entry = unsupported
                    .entry(child.tag.clone())
                    .or_insert_with(|| (0, child_path.clone()));
                entry.0 += 1;
            }
            _ => {}
        }

        check_node(child, &child_path, unsupported, result);
    }
}

/// Check the shape of a nested table
fn check_table(table: &MarkupNode, path: &str, result: &mut CheckResult) {
    let Some(first) = table.first_child() else {
        result.add(
            Diagnostic::new(DiagnosticLevel::Warning, "nested table has no rows")
                .with_source(path)
                .with_suggestion("The table is replaced by a placeholder in the output"),
        );
        return;
    };

    let width = first.len();
    for (idx, row) in table.children.iter().enumerate().skip(1) {
        if row.len() != width {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!(
                        "row {} has {} cell{} but the first row has {}",
                        idx + 1,
                        row.len(),
                        if row.len() == 1 { "" } else { "s" },
                        width
                    ),
                )
                .with_source(format!("{} > {}[{}]", path, row.tag, idx + 1))
                .with_suggestion("The column format is derived from the first row only"),
            );
        }
    }
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_markup() {
        let result = check_markup(
            "x <b>a</b> <table><tr><th>h</th></tr><tr><td><i>v</i><br>w</td></tr></table>",
        );
        assert!(result.is_empty(), "{:?}", result.diagnostics);
        assert_eq!(result.summary(), "no issues found");
    }

    #[test]
    fn test_empty_table_warning() {
        let result = check_markup("<table></table>");
        assert_eq!(result.warnings, 1);
        assert!(result.diagnostics[0].message.contains("no rows"));
        assert!(!result.has_errors());
    }

    #[test]
    fn test_ragged_rows() {
        let result = check_markup("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>");
        assert_eq!(result.warnings, 1);
        assert!(result.diagnostics[0].message.contains("row 2 has 1 cell"));
    }

    #[test]
    fn test_unsupported_tags_are_grouped() {
        let result = check_markup("<span>a</span><span>b</span><em>c</em>");
        assert_eq!(result.infos, 2);
        let messages: Vec<_> = result.diagnostics.iter().map(|d| &d.message).collect();
        assert!(messages[0].contains("<em>"));
        assert!(messages[1].contains("<span>") && messages[1].contains("2 occurrences"));
    }

    #[test]
    fn test_leading_paragraph_note() {
        let result = check_markup("<table><tr><td><p>a</p><p>b</p></td></tr></table>");
        assert_eq!(result.infos, 1);
        assert!(result.diagnostics[0].message.contains("<td>"));
    }

    #[test]
    fn test_paragraph_opening_the_document() {
        let result = check_markup("<p>first</p> then <p>second</p>");
        assert_eq!(result.infos, 1);
        assert!(result.diagnostics[0].message.contains("<body>"));

        let result = check_markup("lead <p>first</p> then <p>second</p>");
        assert!(result.is_empty(), "{:?}", result.diagnostics);
    }

    #[test]
    fn test_warnings_exclude_notes() {
        let result = check_markup("<span>a</span><table></table>");
        let warnings = result.to_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no rows"));
    }

    #[test]
    fn test_summary_format() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::new(DiagnosticLevel::Error, "test"));
        result.add(Diagnostic::new(DiagnosticLevel::Warning, "test"));

        let summary = result.summary();
        assert!(summary.contains("1 error"));
        assert!(summary.contains("1 warning"));
    }
}
