//! Conversion options for the markup to LaTeX converter

use crate::data::constants::DEFAULT_DOCUMENT_CLASS;

/// Default bound on markup nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for data/markup to LaTeX conversion
#[derive(Debug, Clone)]
pub struct D2LOptions {
    /// Caption placed on the longtable (optional)
    pub caption: Option<String>,
    /// Column format of the longtable, e.g. `p{0.2\textwidth}|p{0.8\textwidth}`.
    /// Inferred from the data when absent.
    pub column_format: Option<String>,
    /// Whether to wrap output in a complete LaTeX document
    pub full_document: bool,
    /// Document class to use (default: "article")
    pub document_class: String,
    /// Maximum element nesting the walker accepts before failing
    pub max_depth: usize,
}

impl Default for D2LOptions {
    fn default() -> Self {
        Self {
            caption: None,
            column_format: None,
            full_document: false,
            document_class: DEFAULT_DOCUMENT_CLASS.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl D2LOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_document() -> Self {
        Self {
            full_document: true,
            ..Default::default()
        }
    }

    /// Set the longtable caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set an explicit longtable column format
    pub fn with_column_format(mut self, format: impl Into<String>) -> Self {
        self.column_format = Some(format.into());
        self
    }
}
