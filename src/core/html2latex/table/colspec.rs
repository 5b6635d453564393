//! Column format strings for LaTeX table environments

use std::fmt;

use crate::core::html2latex::node::MarkupNode;
use crate::data::constants::NESTED_COLUMN_TOKEN;

/// LaTeX column alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    /// Convert to LaTeX column specification character
    pub fn to_char(&self) -> char {
        match self {
            ColumnAlign::Left => 'l',
            ColumnAlign::Center => 'c',
            ColumnAlign::Right => 'r',
        }
    }

    /// Parse from a LaTeX column specification character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(ColumnAlign::Left),
            'c' => Some(ColumnAlign::Center),
            'r' => Some(ColumnAlign::Right),
            _ => None,
        }
    }
}

/// One alignment token per column, rendered as e.g. `lll`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnFormat {
    pub columns: Vec<ColumnAlign>,
}

impl ColumnFormat {
    pub fn new(columns: Vec<ColumnAlign>) -> Self {
        ColumnFormat { columns }
    }

    /// `width` identical tokens
    pub fn uniform(width: usize, align: ColumnAlign) -> Self {
        ColumnFormat {
            columns: vec![align; width],
        }
    }

    /// Format of a table nested in a cell: one left-aligned column per
    /// child of the table's first row.
    ///
    /// Returns `None` when the table has no rows.
    pub fn for_nested_table(table: &MarkupNode) -> Option<Self> {
        let first_row = table.first_child()?;
        let align = ColumnAlign::from_char(NESTED_COLUMN_TOKEN).unwrap_or_default();
        Some(Self::uniform(first_row.len(), align))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for ColumnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for align in &self.columns {
            write!(f, "{}", align.to_char())?;
        }
        Ok(())
    }
}
